//! Configuration layer for the webhook plugin.
//!
//! This module provides:
//! - CLI argument parsing with environment fallback ([`Cli`])
//! - Env file parsing ([`EnvFile`])
//! - Resolved configuration ([`PluginConfig`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Each value is resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - e.g. `--build.number 7`
//! 2. **Process environment** - e.g. `DRONE_BUILD_NUMBER=7`
//! 3. **Env file** - assignments from `--env-file`, used only for unset keys
//! 4. **Built-in defaults** - see [`defaults`]; empty string, `0` or `false` otherwise
//!
//! Levels 1 and 2 are handled by clap. The env file is never exported into
//! the process environment. An empty value at any level counts as unset.
//!
//! # Boolean Values
//!
//! Boolean options accept `1`, `t`, `T`, `TRUE`, `true`, `True` and the
//! matching false literals. A bare flag such as `--skip-verify` means `true`.
//!
//! # Integer Values
//!
//! Integers may carry a sign, a `0x`, `0o` or `0b` prefix (or a leading `0`
//! for octal) and `_` between digits: `0x1F`, `1_000`.

mod cli;
pub mod defaults;
mod env_file;
mod error;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, env};
pub use env_file::EnvFile;
pub use error::ConfigError;
pub use validated::{PluginConfig, parse_bool, parse_int};

//! Drone webhook plugin
//!
//! Entry point for the drone-webhook binary.

use drone_webhook::config::{Cli, EnvFile, PluginConfig};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let env_file = cli
        .env_file
        .as_deref()
        .map(|path| (path, EnvFile::load(path)));
    let loaded = env_file.as_ref().and_then(|(_, r)| r.as_ref().ok());

    let config = match PluginConfig::from_raw(&cli, loaded) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    // Verbosity may come from the env file, so tracing waits for the config.
    setup_tracing(config.verbose);

    match &env_file {
        Some((path, Ok(file))) => {
            tracing::debug!("Loaded {} variable(s) from {}", file.len(), path.display());
        }
        Some((path, Err(e))) => tracing::warn!("Ignoring env file {}: {e}", path.display()),
        None => {}
    }

    tracing::debug!("{config}");

    run_application(config)
}

/// Runs the delivery on a single-threaded runtime.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: PluginConfig) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::delivery_error();
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Delivery failed: {e}");
            exit_code::delivery_error()
        }
    }
}

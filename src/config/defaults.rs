//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Default commit ref when the CI system does not provide one.
pub const COMMIT_REF: &str = "refs/heads/master";

/// Default commit branch.
pub const COMMIT_BRANCH: &str = "master";

/// Default build event.
pub const BUILD_EVENT: &str = "push";

/// Default build status.
pub const BUILD_STATUS: &str = "success";

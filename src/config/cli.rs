//! CLI argument parsing using clap.
//!
//! Every option falls back to an environment variable. Values are kept as
//! raw strings here; type coercion happens in [`super::PluginConfig`] so that
//! flags, environment and env-file values share one set of parse errors.

use std::path::PathBuf;

use clap::Parser;

/// Environment variable names read by the plugin.
///
/// The same names are looked up in the env file.
pub mod env {
    pub const WEBHOOK: &str = "PLUGIN_WEBHOOK";
    pub const TOKEN: &str = "PLUGIN_TOKEN";
    pub const SKIP_VERIFY: &str = "PLUGIN_SKIP_VERIFY";
    pub const DRY_RUN: &str = "PLUGIN_DRY_RUN";
    pub const VERBOSE: &str = "PLUGIN_VERBOSE";

    pub const REPO_SCM: &str = "DRONE_REPO_SCM";
    pub const REPO_OWNER: &str = "DRONE_REPO_OWNER";
    pub const REPO_NAME: &str = "DRONE_REPO_NAME";
    pub const REPO_LINK: &str = "DRONE_REPO_LINK";
    pub const REPO_AVATAR: &str = "DRONE_REPO_AVATAR";
    pub const REPO_BRANCH: &str = "DRONE_REPO_BRANCH";
    pub const REPO_PRIVATE: &str = "DRONE_REPO_PRIVATE";
    pub const REPO_TRUSTED: &str = "DRONE_REPO_TRUSTED";

    pub const COMMIT_URL: &str = "DRONE_COMMIT_URL";
    pub const COMMIT_SHA: &str = "DRONE_COMMIT_SHA";
    pub const COMMIT_REF: &str = "DRONE_COMMIT_REF";
    pub const COMMIT_BRANCH: &str = "DRONE_COMMIT_BRANCH";
    pub const COMMIT_LINK: &str = "DRONE_COMMIT_LINK";
    pub const COMMIT_MESSAGE: &str = "DRONE_COMMIT_MESSAGE";
    pub const COMMIT_AUTHOR: &str = "DRONE_COMMIT_AUTHOR";
    pub const COMMIT_AUTHOR_EMAIL: &str = "DRONE_COMMIT_AUTHOR_EMAIL";
    pub const COMMIT_AUTHOR_AVATAR: &str = "DRONE_COMMIT_AUTHOR_AVATAR";

    pub const BUILD_TAG: &str = "DRONE_TAG";
    pub const BUILD_NUMBER: &str = "DRONE_BUILD_NUMBER";
    pub const BUILD_EVENT: &str = "DRONE_BUILD_EVENT";
    pub const BUILD_STATUS: &str = "DRONE_BUILD_STATUS";
    pub const BUILD_LINK: &str = "DRONE_BUILD_LINK";
    pub const BUILD_DEPLOY: &str = "DRONE_DEPLOY_TO";
    pub const BUILD_CREATED: &str = "DRONE_BUILD_CREATED";
    pub const BUILD_STARTED: &str = "DRONE_BUILD_STARTED";
    pub const BUILD_FINISHED: &str = "DRONE_BUILD_FINISHED";

    pub const JOB_NUMBER: &str = "DRONE_JOB_NUMBER";
    pub const JOB_STATUS: &str = "DRONE_JOB_STATUS";
    pub const JOB_ERROR: &str = "DRONE_JOB_ERROR";
    pub const JOB_EXIT_CODE: &str = "DRONE_JOB_EXIT_CODE";
    pub const JOB_STARTED: &str = "DRONE_JOB_STARTED";
    pub const JOB_FINISHED: &str = "DRONE_JOB_FINISHED";
}

/// Drone webhook plugin
///
/// Posts repository and build metadata to a webhook endpoint.
#[derive(Debug, Default, Parser)]
#[command(name = "drone-webhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Webhook URL
    #[arg(long, env = env::WEBHOOK)]
    pub webhook: Option<String>,

    /// Bearer token for the Authorization header
    #[arg(long, env = env::TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long = "skip-verify", env = env::SKIP_VERIFY, num_args = 0..=1, default_missing_value = "true")]
    pub skip_verify: Option<String>,

    /// Build and log the payload without sending it
    #[arg(long = "dry-run", env = env::DRY_RUN, num_args = 0..=1, default_missing_value = "true")]
    pub dry_run: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, env = env::VERBOSE, num_args = 0..=1, default_missing_value = "true")]
    pub verbose: Option<String>,

    /// Repository scm
    #[arg(long = "repo.scm", env = env::REPO_SCM)]
    pub repo_scm: Option<String>,

    /// Repository owner
    #[arg(long = "repo.owner", env = env::REPO_OWNER)]
    pub repo_owner: Option<String>,

    /// Repository name
    #[arg(long = "repo.name", env = env::REPO_NAME)]
    pub repo_name: Option<String>,

    /// Repository link
    #[arg(long = "repo.link", env = env::REPO_LINK)]
    pub repo_link: Option<String>,

    /// Repository avatar
    #[arg(long = "repo.avatar", env = env::REPO_AVATAR)]
    pub repo_avatar: Option<String>,

    /// Repository default branch
    #[arg(long = "repo.branch", env = env::REPO_BRANCH)]
    pub repo_branch: Option<String>,

    /// Repository is private
    #[arg(long = "repo.private", env = env::REPO_PRIVATE, num_args = 0..=1, default_missing_value = "true")]
    pub repo_private: Option<String>,

    /// Repository is trusted
    #[arg(long = "repo.trusted", env = env::REPO_TRUSTED, num_args = 0..=1, default_missing_value = "true")]
    pub repo_trusted: Option<String>,

    /// Git commit url
    #[arg(long = "commit.url", env = env::COMMIT_URL)]
    pub commit_url: Option<String>,

    /// Git commit sha
    #[arg(long = "commit.sha", env = env::COMMIT_SHA)]
    pub commit_sha: Option<String>,

    /// Git commit ref [default: refs/heads/master]
    #[arg(long = "commit.ref", env = env::COMMIT_REF)]
    pub commit_ref: Option<String>,

    /// Git commit branch [default: master]
    #[arg(long = "commit.branch", env = env::COMMIT_BRANCH)]
    pub commit_branch: Option<String>,

    /// Git commit link
    #[arg(long = "commit.link", env = env::COMMIT_LINK)]
    pub commit_link: Option<String>,

    /// Git commit message
    #[arg(long = "commit.message", env = env::COMMIT_MESSAGE)]
    pub commit_message: Option<String>,

    /// Git author name
    #[arg(long = "commit.author", env = env::COMMIT_AUTHOR)]
    pub commit_author: Option<String>,

    /// Git author email
    #[arg(long = "commit.author.email", env = env::COMMIT_AUTHOR_EMAIL)]
    pub commit_author_email: Option<String>,

    /// Git author avatar
    #[arg(long = "commit.author.avatar", env = env::COMMIT_AUTHOR_AVATAR)]
    pub commit_author_avatar: Option<String>,

    /// Build tag
    #[arg(long = "build.tag", env = env::BUILD_TAG)]
    pub build_tag: Option<String>,

    /// Build number
    #[arg(long = "build.number", env = env::BUILD_NUMBER)]
    pub build_number: Option<String>,

    /// Build event [default: push]
    #[arg(long = "build.event", env = env::BUILD_EVENT)]
    pub build_event: Option<String>,

    /// Build status [default: success]
    #[arg(long = "build.status", env = env::BUILD_STATUS)]
    pub build_status: Option<String>,

    /// Build link
    #[arg(long = "build.link", env = env::BUILD_LINK)]
    pub build_link: Option<String>,

    /// Build deployment target
    #[arg(long = "build.deploy", env = env::BUILD_DEPLOY)]
    pub build_deploy: Option<String>,

    /// Build created (unix seconds)
    #[arg(long = "build.created", env = env::BUILD_CREATED)]
    pub build_created: Option<String>,

    /// Build started (unix seconds)
    #[arg(long = "build.started", env = env::BUILD_STARTED)]
    pub build_started: Option<String>,

    /// Build finished (unix seconds)
    #[arg(long = "build.finished", env = env::BUILD_FINISHED)]
    pub build_finished: Option<String>,

    /// Job number
    #[arg(long = "job.number", env = env::JOB_NUMBER)]
    pub job_number: Option<String>,

    /// Job status
    #[arg(long = "job.status", env = env::JOB_STATUS)]
    pub job_status: Option<String>,

    /// Job error
    #[arg(long = "job.error", env = env::JOB_ERROR)]
    pub job_error: Option<String>,

    /// Job exit code
    #[arg(long = "job.exit.code", env = env::JOB_EXIT_CODE)]
    pub job_exit_code: Option<String>,

    /// Job started (unix seconds)
    #[arg(long = "job.started", env = env::JOB_STARTED)]
    pub job_started: Option<String>,

    /// Job finished (unix seconds)
    #[arg(long = "job.finished", env = env::JOB_FINISHED)]
    pub job_finished: Option<String>,

    /// Source additional variables from an env file (never overrides set values)
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}

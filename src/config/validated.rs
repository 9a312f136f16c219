//! Resolved plugin configuration.
//!
//! This module merges CLI/environment values with an optional env file and
//! built-in defaults, coercing each value to its field type.

use std::fmt;

use crate::metadata::{Build, Job, Repo};
use crate::webhook::DeliveryConfig;

use super::cli::{Cli, env};
use super::defaults;
use super::env_file::EnvFile;
use super::error::ConfigError;

/// Fully resolved configuration ready for use by the application.
///
/// Built once at startup and passed by value into the delivery step.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Repository snapshot (sent)
    pub repo: Repo,

    /// Build snapshot (sent)
    pub build: Build,

    /// Job snapshot (never sent)
    pub job: Job,

    /// Webhook endpoint, credentials and TLS mode
    pub delivery: DeliveryConfig,

    /// Dry-run mode (log the payload without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for PluginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ webhook: {}, token: {}, skip_verify: {}, repo: {}, build: #{} {} {}, dry_run: {} }}",
            self.delivery.webhook,
            if self.delivery.token.is_empty() {
                "none"
            } else {
                "<redacted>"
            },
            self.delivery.skip_verify,
            self.repo.full_name(),
            self.build.number,
            self.build.event,
            self.build.status,
            self.dry_run,
        )
    }
}

/// One layer lookup: CLI/process environment first, then the env file.
struct Sources<'a> {
    env_file: Option<&'a EnvFile>,
}

impl Sources<'_> {
    /// Empty values count as unset at every layer, so they fall through to
    /// the next source and finally to the default.
    fn lookup<'v>(&'v self, cli_value: Option<&'v str>, key: &'static str) -> Option<&'v str> {
        cli_value
            .filter(|v| !v.is_empty())
            .or_else(|| self.env_file.and_then(|f| f.get(key)))
            .filter(|v| !v.is_empty())
    }

    fn string(&self, cli_value: Option<&str>, key: &'static str) -> String {
        self.string_or(cli_value, key, "")
    }

    fn string_or(&self, cli_value: Option<&str>, key: &'static str, default: &str) -> String {
        self.lookup(cli_value, key).unwrap_or(default).to_string()
    }

    fn int(&self, cli_value: Option<&str>, key: &'static str) -> Result<i64, ConfigError> {
        self.lookup(cli_value, key)
            .map_or(Ok(0), |value| parse_int(key, value))
    }

    fn bool(&self, cli_value: Option<&str>, key: &'static str) -> Result<bool, ConfigError> {
        self.lookup(cli_value, key)
            .map_or(Ok(false), |value| parse_bool(key, value))
    }
}

impl PluginConfig {
    /// Creates a configuration from CLI arguments and an optional env file.
    ///
    /// For every field the CLI value (which already includes the process
    /// environment) wins; the env file only fills fields that are still unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean value cannot be parsed.
    pub fn from_raw(cli: &Cli, env_file: Option<&EnvFile>) -> Result<Self, ConfigError> {
        let sources = Sources { env_file };

        Ok(Self {
            repo: Self::resolve_repo(cli, &sources)?,
            build: Self::resolve_build(cli, &sources)?,
            job: Self::resolve_job(cli, &sources)?,
            delivery: Self::resolve_delivery(cli, &sources)?,
            dry_run: sources.bool(cli.dry_run.as_deref(), env::DRY_RUN)?,
            verbose: sources.bool(cli.verbose.as_deref(), env::VERBOSE)?,
        })
    }

    fn resolve_delivery(cli: &Cli, s: &Sources<'_>) -> Result<DeliveryConfig, ConfigError> {
        Ok(DeliveryConfig {
            webhook: s.string(cli.webhook.as_deref(), env::WEBHOOK),
            token: s.string(cli.token.as_deref(), env::TOKEN),
            skip_verify: s.bool(cli.skip_verify.as_deref(), env::SKIP_VERIFY)?,
        })
    }

    fn resolve_repo(cli: &Cli, s: &Sources<'_>) -> Result<Repo, ConfigError> {
        Ok(Repo {
            owner: s.string(cli.repo_owner.as_deref(), env::REPO_OWNER),
            name: s.string(cli.repo_name.as_deref(), env::REPO_NAME),
            scm: s.string(cli.repo_scm.as_deref(), env::REPO_SCM),
            link: s.string(cli.repo_link.as_deref(), env::REPO_LINK),
            avatar: s.string(cli.repo_avatar.as_deref(), env::REPO_AVATAR),
            branch: s.string(cli.repo_branch.as_deref(), env::REPO_BRANCH),
            private: s.bool(cli.repo_private.as_deref(), env::REPO_PRIVATE)?,
            trusted: s.bool(cli.repo_trusted.as_deref(), env::REPO_TRUSTED)?,
        })
    }

    fn resolve_build(cli: &Cli, s: &Sources<'_>) -> Result<Build, ConfigError> {
        Ok(Build {
            tag: s.string(cli.build_tag.as_deref(), env::BUILD_TAG),
            event: s.string_or(
                cli.build_event.as_deref(),
                env::BUILD_EVENT,
                defaults::BUILD_EVENT,
            ),
            number: s.int(cli.build_number.as_deref(), env::BUILD_NUMBER)?,
            commit: s.string(cli.commit_sha.as_deref(), env::COMMIT_SHA),
            git_ref: s.string_or(
                cli.commit_ref.as_deref(),
                env::COMMIT_REF,
                defaults::COMMIT_REF,
            ),
            branch: s.string_or(
                cli.commit_branch.as_deref(),
                env::COMMIT_BRANCH,
                defaults::COMMIT_BRANCH,
            ),
            author: s.string(cli.commit_author.as_deref(), env::COMMIT_AUTHOR),
            author_email: s.string(cli.commit_author_email.as_deref(), env::COMMIT_AUTHOR_EMAIL),
            author_avatar: s.string(
                cli.commit_author_avatar.as_deref(),
                env::COMMIT_AUTHOR_AVATAR,
            ),
            message: s.string(cli.commit_message.as_deref(), env::COMMIT_MESSAGE),
            commit_url: s.string(cli.commit_url.as_deref(), env::COMMIT_URL),
            commit_link: s.string(cli.commit_link.as_deref(), env::COMMIT_LINK),
            status: s.string_or(
                cli.build_status.as_deref(),
                env::BUILD_STATUS,
                defaults::BUILD_STATUS,
            ),
            link: s.string(cli.build_link.as_deref(), env::BUILD_LINK),
            deploy: s.string(cli.build_deploy.as_deref(), env::BUILD_DEPLOY),
            created: s.int(cli.build_created.as_deref(), env::BUILD_CREATED)?,
            started: s.int(cli.build_started.as_deref(), env::BUILD_STARTED)?,
            finished: s.int(cli.build_finished.as_deref(), env::BUILD_FINISHED)?,
        })
    }

    fn resolve_job(cli: &Cli, s: &Sources<'_>) -> Result<Job, ConfigError> {
        Ok(Job {
            number: s.int(cli.job_number.as_deref(), env::JOB_NUMBER)?,
            status: s.string(cli.job_status.as_deref(), env::JOB_STATUS),
            error: s.string(cli.job_error.as_deref(), env::JOB_ERROR),
            exit_code: s.int(cli.job_exit_code.as_deref(), env::JOB_EXIT_CODE)?,
            started: s.int(cli.job_started.as_deref(), env::JOB_STARTED)?,
            finished: s.int(cli.job_finished.as_deref(), env::JOB_FINISHED)?,
        })
    }
}

/// Parses a signed integer, tolerating surrounding whitespace.
///
/// Follows integer literal syntax: an optional sign, an optional `0x`, `0o`
/// or `0b` prefix (a bare leading `0` means octal) and `_` separators
/// between digits, so `42`, `-7`, `0x1F` and `1_000` are all accepted.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidNumber`] for anything else, or on overflow.
pub fn parse_int(field: &'static str, value: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidNumber {
        field,
        value: value.to_string(),
        reason,
    };

    let trimmed = value.trim();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-' | b'+') => trimmed.split_at(1),
        _ => ("", trimmed),
    };
    let (radix, prefixed, digits) = split_radix(unsigned);

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(invalid("expected an integer".to_string()));
    }
    if digits.contains("__") || digits.ends_with('_') || (!prefixed && digits.starts_with('_')) {
        return Err(invalid("misplaced '_' separator".to_string()));
    }

    let digits = digits.replace('_', "");
    i64::from_str_radix(&format!("{sign}{digits}"), radix).map_err(|e| invalid(e.to_string()))
}

/// Splits a base prefix off `s`, returning `(radix, had_prefix, digits)`.
fn split_radix(s: &str) -> (u32, bool, &str) {
    let prefix = s.get(..2).map(str::to_ascii_lowercase);
    match prefix.as_deref() {
        Some("0x") => (16, true, &s[2..]),
        Some("0o") => (8, true, &s[2..]),
        Some("0b") => (2, true, &s[2..]),
        _ if s.len() > 1 && s.starts_with('0') => (8, true, &s[1..]),
        _ => (10, false, s),
    }
}

/// Parses a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBool`] for any other value.
pub fn parse_bool(field: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            field,
            value: value.to_string(),
        }),
    }
}

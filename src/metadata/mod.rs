//! Build metadata snapshots taken from the CI environment.
//!
//! [`Repo`] and [`Build`] are serialized into the webhook payload.
//! [`Job`] describes the current execution unit and is never sent.

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use serde::Serialize;

/// Snapshot of the source repository at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Repo {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Source control system, e.g. `git`
    pub scm: String,
    /// Web link to the repository
    pub link: String,
    /// Repository avatar URL
    pub avatar: String,
    /// Default branch
    pub branch: String,
    /// Whether the repository is private
    pub private: bool,
    /// Whether the repository is trusted
    pub trusted: bool,
}

impl Repo {
    /// Returns `owner/name`, or just the name when the owner is unknown.
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.owner.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.owner, self.name)
        }
    }
}

/// Snapshot of the build that triggered the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Build {
    pub tag: String,
    pub event: String,
    pub number: i64,
    /// Commit SHA
    pub commit: String,
    /// Commit ref, e.g. `refs/heads/master`
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Commit branch
    pub branch: String,
    /// Commit author name
    pub author: String,
    pub author_email: String,
    pub author_avatar: String,
    /// Commit message
    pub message: String,
    /// Remote URL of the commit
    pub commit_url: String,
    /// Web link to the commit or compare view
    pub commit_link: String,
    pub status: String,
    /// Web link to the build
    pub link: String,
    /// Deployment target
    pub deploy: String,
    /// Unix timestamps (seconds)
    pub created: i64,
    pub started: i64,
    pub finished: i64,
}

/// Snapshot of the current job.
///
/// Deliberately not `Serialize`: job details never leave the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Job {
    pub number: i64,
    pub status: String,
    pub error: String,
    pub exit_code: i64,
    /// Unix timestamps (seconds)
    pub started: i64,
    pub finished: i64,
}

impl Job {
    /// Returns true if the job reported an error message or a non-zero exit code.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        !self.error.is_empty() || self.exit_code != 0
    }
}

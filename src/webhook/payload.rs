//! Outbound JSON payload.

use serde::Serialize;

use crate::metadata::{Build, Repo};

/// The webhook body: exactly `{"repo": ..., "build": ...}`.
///
/// Job details and delivery credentials have no place here.
#[derive(Debug, Serialize)]
pub struct Payload<'a> {
    pub repo: &'a Repo,
    pub build: &'a Build,
}

impl<'a> Payload<'a> {
    #[must_use]
    pub const fn new(repo: &'a Repo, build: &'a Build) -> Self {
        Self { repo, build }
    }

    /// Serializes the payload to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

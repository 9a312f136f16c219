//! Error types for configuration loading.

use thiserror::Error;

/// Error type for configuration operations.
///
/// Loading does no validation beyond type coercion, so every variant
/// describes a value that could not be converted to its field type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric field held a value that is not an integer.
    #[error("Invalid number for {field}: '{value}': {reason}")]
    InvalidNumber {
        /// Environment variable name of the field
        field: &'static str,
        /// The rejected value
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A boolean field held a value that is not a recognized boolean literal.
    #[error("Invalid boolean for {field}: '{value}': expected true/false, t/f or 1/0")]
    InvalidBool {
        /// Environment variable name of the field
        field: &'static str,
        /// The rejected value
        value: String,
    },
}

impl ConfigError {
    /// Returns the environment variable name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidNumber { field, .. } | Self::InvalidBool { field, .. } => *field,
        }
    }
}

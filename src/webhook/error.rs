//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the transport level. A response with an
/// error status is not an `HttpError`.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The HTTP client could not be constructed (e.g. TLS backend failure).
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake and certificate errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out under the transport's default timeout.
    #[error("Request timed out")]
    Timeout,

    /// The response body of an error-status response could not be read.
    #[error("Failed to read response body: {0}")]
    ResponseBody(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for a delivery attempt.
///
/// Every variant is fatal for the plugin run.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The payload could not be serialized to JSON.
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// The configured webhook is not a valid absolute URL.
    #[error("Invalid webhook URL '{url}': {source}")]
    InvalidUrl {
        /// The rejected webhook string
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The token cannot be carried in an `Authorization` header.
    #[error("Invalid {name} header value: {source}")]
    InvalidHeader {
        /// Header name
        name: &'static str,
        /// Underlying header error
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    /// The request failed at the transport level.
    #[error(transparent)]
    Http(#[from] HttpError),
}

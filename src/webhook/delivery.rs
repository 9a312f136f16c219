//! Single-shot webhook delivery.

use std::fmt;

use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};

use crate::metadata::{Build, Job, Repo};

use super::{DeliveryError, HttpClient, HttpRequest, Payload, ReqwestClient, TlsMode};

/// Where and how to deliver the payload.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Webhook URL, parsed at delivery time
    pub webhook: String,
    /// Bearer token; may be empty
    pub token: String,
    /// Accept any TLS certificate
    pub skip_verify: bool,
}

impl fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("webhook", &self.webhook)
            .field("token", &"<redacted>")
            .field("skip_verify", &self.skip_verify)
            .finish()
    }
}

/// Result of a delivery that completed a request/response round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The endpoint answered with a status below 400.
    Delivered {
        status: http::StatusCode,
    },
    /// The endpoint answered with a status of 400 or above.
    ///
    /// Not an error: the run still succeeds, but the diagnostic is printed.
    Rejected {
        /// The webhook URL exactly as configured
        url: String,
        status: http::StatusCode,
        body: String,
    },
}

impl DeliveryOutcome {
    /// Returns the diagnostic text for a rejected delivery, `None` otherwise.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Delivered { .. } => None,
            Self::Rejected { .. } => Some(self.to_string()),
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> http::StatusCode {
        match self {
            Self::Delivered { status } | Self::Rejected { status, .. } => *status,
        }
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered { status } => write!(f, "Delivered: {status}"),
            Self::Rejected { url, status, body } => write!(
                f,
                "URL: {url}\n  RESPONSE STATUS: {status}\n  RESPONSE BODY: {body}"
            ),
        }
    }
}

/// Posts build metadata to one webhook endpoint.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
#[derive(Debug)]
pub struct Webhook<H> {
    client: H,
    config: DeliveryConfig,
}

impl<H> Webhook<H> {
    #[must_use]
    pub const fn new(client: H, config: DeliveryConfig) -> Self {
        Self { client, config }
    }
}

impl<H: HttpClient> Webhook<H> {
    /// Builds the POST request carrying the encoded payload.
    ///
    /// The payload is encoded before the URL is parsed, so an encoding
    /// failure is reported even when the URL is also bad.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Encode`], [`DeliveryError::InvalidUrl`] or
    /// [`DeliveryError::InvalidHeader`]. No network activity happens here.
    pub fn build_request(&self, repo: &Repo, build: &Build) -> Result<HttpRequest, DeliveryError> {
        let body = Payload::new(repo, build).encode()?;

        let url = url::Url::parse(&self.config.webhook).map_err(|source| {
            DeliveryError::InvalidUrl {
                url: self.config.webhook.clone(),
                source,
            }
        })?;

        let authorization = HeaderValue::from_str(&format!("Bearer {}", self.config.token))
            .map_err(|source| DeliveryError::InvalidHeader {
                name: "Authorization",
                source,
            })?;

        Ok(HttpRequest::post(url)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(AUTHORIZATION, authorization)
            .with_body(body))
    }

    /// Sends the payload and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] if the request cannot be built or the
    /// transport fails. Error statuses are reported as
    /// [`DeliveryOutcome::Rejected`], not as errors.
    pub async fn send(&self, repo: &Repo, build: &Build) -> Result<DeliveryOutcome, DeliveryError> {
        let request = self.build_request(repo, build)?;

        tracing::debug!("Sending webhook to {}", request.url);
        let response = self.client.request(request).await?;

        if response.is_error() {
            return Ok(DeliveryOutcome::Rejected {
                url: self.config.webhook.clone(),
                status: response.status,
                body: response.body_text(),
            });
        }

        tracing::debug!("Webhook delivered: {}", response.status);
        Ok(DeliveryOutcome::Delivered {
            status: response.status,
        })
    }
}

/// Delivers `{repo, build}` to the configured webhook.
///
/// Selects a verifying or trust-all client from `config.skip_verify`,
/// sends one request and prints the diagnostic to stdout if the endpoint
/// rejected it. `job` is only logged; it is never part of the body.
///
/// # Errors
///
/// Returns [`DeliveryError`] on client setup, encoding, URL, header or
/// transport failure. A rejected delivery is not an error.
pub async fn deliver(
    repo: &Repo,
    build: &Build,
    job: &Job,
    config: DeliveryConfig,
) -> Result<(), DeliveryError> {
    tracing::debug!(
        job = job.number,
        status = %job.status,
        exit_code = job.exit_code,
        failed = job.has_failed(),
        "Delivering build #{} of {}",
        build.number,
        repo.full_name()
    );

    let client = ReqwestClient::new(TlsMode::from_skip_verify(config.skip_verify))?;
    if client.tls_mode() == TlsMode::SkipVerify {
        tracing::warn!("TLS certificate verification is disabled");
    }

    let outcome = Webhook::new(client, config).send(repo, build).await?;

    if let Some(diagnostic) = outcome.diagnostic() {
        tracing::warn!("Webhook endpoint rejected the payload: {}", outcome.status());
        println!("{diagnostic}");
    }

    Ok(())
}

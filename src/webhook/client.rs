//! Production HTTP client implementation using reqwest.

use super::http::is_error_status;
use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Certificate verification mode for outbound TLS connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// Verify server certificates against the system roots.
    #[default]
    Verify,
    /// Accept any server certificate.
    SkipVerify,
}

impl TlsMode {
    /// Maps the plugin's `skip_verify` flag to a mode.
    #[must_use]
    pub const fn from_skip_verify(skip_verify: bool) -> Self {
        if skip_verify {
            Self::SkipVerify
        } else {
            Self::Verify
        }
    }
}

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` that implements [`HttpClient`].
/// It inherits reqwest's default configuration, including its timeouts.
///
/// # Example
///
/// ```no_run
/// use drone_webhook::webhook::{HttpClient, HttpRequest, ReqwestClient, TlsMode};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new(TlsMode::Verify)?;
/// let url = Url::parse("https://api.example.com/webhook")?;
/// let request = HttpRequest::post(url).with_body(b"{}".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    tls_mode: TlsMode,
}

impl ReqwestClient {
    /// Creates an HTTP client with the given certificate verification mode.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the TLS backend cannot be initialised.
    pub fn new(tls_mode: TlsMode) -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .danger_accept_invalid_certs(tls_mode == TlsMode::SkipVerify)
            .build()
            .map_err(|e| HttpError::ClientBuild(Box::new(e)))?;

        Ok(Self { inner, tls_mode })
    }

    /// Returns the certificate verification mode.
    #[must_use]
    pub const fn tls_mode(&self) -> TlsMode {
        self.tls_mode
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        if !is_error_status(status) {
            return Ok(HttpResponse::new(status, Vec::new()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::ResponseBody(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, body))
    }
}

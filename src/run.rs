//! Application execution logic.
//!
//! Turns a resolved [`PluginConfig`] into exactly one delivery attempt,
//! or a logged preview of it in dry-run mode.

use drone_webhook::config::PluginConfig;
use drone_webhook::metadata::{Build, Repo};
use drone_webhook::webhook::{
    DeliveryConfig, DeliveryError, ReqwestClient, TlsMode, Webhook, deliver,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Executes the plugin.
///
/// # Errors
///
/// Returns a [`DeliveryError`] if the payload cannot be encoded, the
/// webhook URL or token is unusable, or the request fails in transport.
/// A response with an error status is not an error.
pub async fn execute(config: PluginConfig) -> Result<(), DeliveryError> {
    let PluginConfig {
        repo,
        build,
        job,
        delivery,
        dry_run,
        ..
    } = config;

    if dry_run {
        tracing::info!("Dry-run mode enabled - the webhook request will be logged but not sent");
        return preview(&repo, &build, delivery);
    }

    deliver(&repo, &build, &job, delivery).await
}

/// Builds the request exactly as a real run would and logs it.
fn preview(repo: &Repo, build: &Build, delivery: DeliveryConfig) -> Result<(), DeliveryError> {
    let client = ReqwestClient::new(TlsMode::from_skip_verify(delivery.skip_verify))?;
    let request = Webhook::new(client, delivery).build_request(repo, build)?;

    let body = request
        .body
        .as_deref()
        .map(String::from_utf8_lossy)
        .unwrap_or_default();
    tracing::info!("[dry-run] {} {}", request.method, request.url);
    tracing::info!("[dry-run] body: {body}");

    Ok(())
}

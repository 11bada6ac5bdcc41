//! HTTP client construction and response handling.

use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use switchyard_error::HttpError;
use tracing::{debug, error, instrument};

/// Timeout applied to every outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the HTTP client used by an adapter.
///
/// Each call gets [`REQUEST_TIMEOUT`]; a request that exceeds it fails with a
/// transport error and is not retried.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client() -> Result<Client, HttpError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("switchyard/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| HttpError::transport(format!("Failed to build HTTP client: {}", e)))
}

/// Reads a JSON body, mapping non-success statuses to [`HttpError`].
///
/// The status and body of a failed response are surfaced verbatim.
#[instrument(skip(response), fields(status = %response.status(), url = %response.url()))]
pub async fn read_json(response: Response) -> Result<Value, HttpError> {
    let text = read_text(response).await?;
    serde_json::from_str(&text).map_err(|e| {
        error!(error = %e, "Failed to parse response body as JSON");
        HttpError::decode(format!("Failed to parse JSON: {}", e))
    })
}

/// Reads a text body, mapping non-success statuses to [`HttpError`].
pub async fn read_text(response: Response) -> Result<String, HttpError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "Remote service returned an error");
        return Err(HttpError::status(status.as_u16(), body));
    }

    let text = response
        .text()
        .await
        .map_err(|e| HttpError::transport(format!("Failed to read response body: {}", e)))?;
    debug!(bytes = text.len(), "Received response body");
    Ok(text)
}

/// Maps a `reqwest` send failure to a transport error.
#[track_caller]
pub fn transport_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::transport(format!("Request timed out after {:?}: {}", REQUEST_TIMEOUT, err))
    } else {
        HttpError::transport(format!("Request failed: {}", err))
    }
}

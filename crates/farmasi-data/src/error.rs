//! Mapping of HTTP outcomes to `ApiError`.

use std::time::Duration;

use farmasi_core::{ApiError, ApiOperation};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Errors raised while constructing a client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Build the error for a non-2xx response.
///
/// The backend reports failures as `{"error": "<message>"}`. Any other
/// body shape falls back to the operation's generic message.
pub fn error_from_response(operation: ApiOperation, status: u16, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string));
    if message.is_none() {
        warn!(
            %operation,
            status,
            body = %String::from_utf8_lossy(body),
            "error response without an error string"
        );
    }
    ApiError::backend(operation, status, message)
}

/// Decode a successful response body.
pub fn decode_body<T: DeserializeOwned>(operation: ApiOperation, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(%operation, error = %e, "malformed response body");
        ApiError::malformed(operation, e.to_string())
    })
}

/// Classify a failure reported by the HTTP client.
pub fn error_from_reqwest(operation: ApiOperation, err: &reqwest::Error, limit: Duration) -> ApiError {
    if err.is_timeout() {
        warn!(%operation, ?limit, "backend call timed out");
        ApiError::timeout(operation, limit)
    } else if err.is_decode() {
        warn!(%operation, error = %err, "failed to read response body");
        ApiError::malformed(operation, err.to_string())
    } else {
        warn!(%operation, error = %err, "backend unreachable");
        ApiError::transport(operation, err.to_string())
    }
}

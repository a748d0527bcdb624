use serde::Serialize;
use thiserror::Error;

/// Fixed fallback used when an error response body yields no usable message.
pub const REQUEST_FAILED: &str = "Request failed";

/// Server-reported failure reduced to a human-readable message.
///
/// The HTTP status code and raw body are intentionally discarded; callers
/// only ever see the message extracted from the response's `detail` field.
#[derive(Debug, Error, Serialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

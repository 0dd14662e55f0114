//! Error taxonomy for remote API interactions.
//!
//! Three failure classes exist: local validation failures (owned by the
//! domain layers and never reaching this module), transport failures, and
//! server rejections. A rejection carries the server's `message` body
//! verbatim so callers can surface it without reinterpretation.

use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server rejected the request with a non-2xx status.
    #[error("request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code of the rejection.
        status: u16,
        /// Server-provided message, surfaced verbatim.
        message: String,
    },

    /// The request failed before a response was received.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The request was cancelled before completion and its result discarded.
    #[error("request cancelled before completion")]
    Cancelled,
}

impl ApiError {
    /// Wraps a transport-level error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Creates a rejection from a status code and response body.
    ///
    /// The body is expected to be a JSON object with a `message` field.
    /// Bodies that do not parse fall back to the trimmed raw text, and an
    /// empty body falls back to a canonical description of the status.
    #[must_use]
    pub fn rejection(status: u16, body: &str) -> Self {
        let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
        let message = parsed.map_or_else(
            || {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("request failed with status {status}")
                } else {
                    trimmed.to_owned()
                }
            },
            |e| e.message,
        );
        Self::Rejected { status, message }
    }

    /// Returns `true` when the error is a server rejection.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Error body shape returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

//! Content-derived idempotency keys for mutating requests.
//!
//! A key is the hex-encoded SHA-256 digest of the serialized payload, so a
//! retried submission of the same content carries the same key and the
//! backend can deduplicate it. The key travels in the `Idempotency-Key`
//! header.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Header name carrying the idempotency key.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Deterministic key identifying one logical mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Derives a key from a serializable payload.
    ///
    /// # Errors
    ///
    /// Returns [`IdempotencyKeyError`] when the payload cannot be
    /// serialized to JSON.
    pub fn for_payload<T: Serialize>(payload: &T) -> Result<Self, IdempotencyKeyError> {
        let bytes = serde_json::to_vec(payload).map_err(IdempotencyKeyError)?;
        let digest = Sha256::digest(&bytes);
        Ok(Self(hex::encode(digest)))
    }

    /// Returns the key as a header value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error raised when a payload cannot be serialized for key derivation.
#[derive(Debug, Error)]
#[error("failed to serialize payload for idempotency key: {0}")]
pub struct IdempotencyKeyError(#[source] serde_json::Error);

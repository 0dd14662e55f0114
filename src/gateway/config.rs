//! Gateway configuration.
//!
//! Configuration is an explicit value passed to the client, never a global
//! singleton. The environment constructor exists for binaries and
//! deployment scripts; library callers construct the value directly.

use thiserror::Error;

/// Environment variable naming the API base URL.
pub const BASE_URL_VAR: &str = "CIVITAS_API_BASE_URL";

/// Environment variable naming the bearer token.
pub const TOKEN_VAR: &str = "CIVITAS_API_TOKEN";

/// Connection settings for the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: String,
    token: Option<String>,
}

impl GatewayConfig {
    /// Creates a configuration with an authorization token.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            token: Some(token.into()),
        }
    }

    /// Creates an unauthenticated configuration.
    ///
    /// Only the public departments read succeeds without a token; every
    /// other endpoint rejects the call server-side.
    #[must_use]
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            token: None,
        }
    }

    /// Reads configuration from `CIVITAS_API_BASE_URL` and
    /// `CIVITAS_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] when the base URL variable is
    /// unset or empty. A missing token yields an anonymous configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let token = std::env::var(TOKEN_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty());
        Ok(Self {
            base_url: normalize_base_url(base_url),
            token,
        })
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the bearer token, when configured.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Joins a request path onto the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn normalize_base_url(raw: String) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Errors raised while loading gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The base URL variable is unset or empty.
    #[error("missing API base URL ({BASE_URL_VAR})")]
    MissingBaseUrl,
}

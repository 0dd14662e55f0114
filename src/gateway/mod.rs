//! Shared gateway plumbing for the remote civic-issue REST API.
//!
//! Every feature module talks to the backend through this layer: a single
//! configured [`ApiClient`], Bearer-token authorization, the three-way
//! error taxonomy in [`error`], content-derived idempotency keys for
//! mutating requests, and per-request cancellation. There is no client-side
//! queueing, retry, or backoff; a failed call surfaces immediately and is
//! scoped to the triggering action.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod idempotency;

pub use auth::{CurrentUser, ParseRoleError, Role};
pub use client::ApiClient;
pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, ApiResult};
pub use idempotency::IdempotencyKey;

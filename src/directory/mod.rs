//! Department, official, and worker administration.
//!
//! Admins manage departments and government officials; officials manage
//! field workers. Creation payloads are validated locally before any call
//! is made, deletion is gated by a typed confirmation step, and server-side
//! invariants (department code uniqueness) are surfaced verbatim rather
//! than re-checked locally. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! Port contracts for directory administration.
//!
//! Ports define infrastructure-agnostic interfaces used by directory
//! services.

pub mod gateway;

pub use gateway::DirectoryGateway;

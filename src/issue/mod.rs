//! Issue reporting, submission validation, and the engagement layer.
//!
//! Citizens submit issues through a locally validated draft, upvote and
//! comment on existing issues, and see lists ranked by a server-derived
//! engagement score. Submission degrades gracefully when media upload
//! fails, and every rejected call preserves the user's input. The module
//! follows hexagonal architecture:
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

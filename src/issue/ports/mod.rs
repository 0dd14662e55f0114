//! Port contracts for issue reporting and engagement.
//!
//! Ports define infrastructure-agnostic interfaces used by issue services.

pub mod gateway;
pub mod media;

pub use gateway::{IssueGateway, IssueSubmission};
pub use media::MediaUploader;

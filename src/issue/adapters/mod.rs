//! Adapter implementations of the issue ports.

pub mod http;
pub mod memory;

pub use http::{HttpIssueGateway, HttpMediaUploader};
pub use memory::{InMemoryIssueGateway, InMemoryMediaUploader};

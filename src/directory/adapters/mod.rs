//! Adapter implementations of the directory ports.

pub mod http;
pub mod memory;

pub use http::HttpDirectoryGateway;
pub use memory::InMemoryDirectoryGateway;

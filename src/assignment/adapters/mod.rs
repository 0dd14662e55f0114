//! Adapter implementations of the assignment ports.

pub mod http;
pub mod memory;

pub use http::HttpAssignmentGateway;
pub use memory::InMemoryAssignmentGateway;

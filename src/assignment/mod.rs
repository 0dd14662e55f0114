//! Work-order assignment and lifecycle management.
//!
//! Officials open a work order for a reported issue by assigning a field
//! worker, workers progress it through to completion, and officials review
//! and close the result. An issue carries at most one live work order;
//! assigning again while one exists replaces it.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

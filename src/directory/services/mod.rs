//! Application services for directory administration.

mod admin;

pub use admin::{DirectoryError, DirectoryResult, DirectoryService};

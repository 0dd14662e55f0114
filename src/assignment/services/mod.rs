//! Application services for work-order management.

mod lifecycle;

pub use lifecycle::{AssignmentError, AssignmentResult, AssignmentService};

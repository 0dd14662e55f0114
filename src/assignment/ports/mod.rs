//! Port contracts for work-order management.

pub mod gateway;

pub use gateway::{AssignmentGateway, TaskAssignment, TaskProgress, TaskRejection, TaskReview};

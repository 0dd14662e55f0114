//! Domain model for work orders.

mod error;
mod ids;
mod task;

pub use error::AssignmentDomainError;
pub use ids::TaskId;
pub use task::{NewTask, Task, WorkerRef, displayed_status};

//! Domain model for directory administration.
//!
//! Departments, officials, and workers are owned by the backend; the types
//! here are validated payloads and transient read-model copies. Deletion
//! passes through a typed confirmation gate so a destructive call cannot be
//! issued without an explicit confirm step.

mod confirm;
mod department;
mod error;
mod ids;
mod official;
mod worker;

pub use confirm::{ConfirmedDeletion, PendingDeletion};
pub use department::{Department, DepartmentCode, DepartmentDraft, DepartmentUpdate};
pub use error::DirectoryDomainError;
pub use ids::{DepartmentId, OfficialId, WorkerId};
pub use official::{Official, OfficialDraft, OfficialUpdate};
pub use worker::{Availability, ParseAvailabilityError, Worker, WorkerDraft};

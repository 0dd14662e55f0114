//! Domain errors for work orders.

use crate::issue::domain::LifecycleStatus;
use thiserror::Error;

/// Rule violations raised by work-order operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// The work description was empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// Completion or review remarks were empty after trimming.
    #[error("remarks must not be empty")]
    EmptyRemarks,

    /// The rejection reason was empty after trimming.
    #[error("rejection reason must not be empty")]
    EmptyReason,

    /// The requested status change is not in the transition table.
    #[error("cannot move a task from '{from}' to '{to}'")]
    InvalidStatusTransition {
        /// Current status.
        from: LifecycleStatus,
        /// Requested status.
        to: LifecycleStatus,
    },
}

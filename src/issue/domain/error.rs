//! Error types for issue domain validation and parsing.

use super::status::LifecycleStatus;
use thiserror::Error;

/// Errors returned while validating issue domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The issue title is empty after trimming.
    #[error("issue title must not be empty")]
    EmptyTitle,

    /// The description is shorter than the required minimum.
    #[error("description must be at least {min} characters, got {actual}")]
    DescriptionTooShort {
        /// Required minimum length in characters.
        min: usize,
        /// Length of the submitted description.
        actual: usize,
    },

    /// The location is shorter than the required minimum.
    #[error("location must be at least {min} characters, got {actual}")]
    LocationTooShort {
        /// Required minimum length in characters.
        min: usize,
        /// Length of the submitted location.
        actual: usize,
    },

    /// A comment's text is empty after trimming.
    #[error("comment text must not be empty")]
    EmptyCommentText,

    /// The requested status change is not in the transition table.
    #[error("invalid status transition from '{from}' to '{to}'")]
    InvalidStatusTransition {
        /// Current status.
        from: LifecycleStatus,
        /// Requested status.
        to: LifecycleStatus,
    },
}

/// Error returned while parsing lifecycle statuses from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lifecycle status: {0}")]
pub struct ParseLifecycleStatusError(pub String);

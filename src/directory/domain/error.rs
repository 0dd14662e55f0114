//! Error types for directory domain validation.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The entity name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The department code is empty or contains non-alphanumeric characters.
    #[error("invalid department code '{0}', expected alphanumeric characters")]
    InvalidDepartmentCode(String),

    /// The official's email address is missing or malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// A password is required when creating an official.
    #[error("password must not be empty on creation")]
    EmptyPassword,

    /// The worker contact number is empty after trimming.
    #[error("contact number must not be empty")]
    EmptyContact,
}

//! Field worker entity and its validated payloads.

use super::department::validated_name;
use super::{DepartmentCode, DirectoryDomainError, WorkerId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Availability of a field worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// The worker can take on new tasks.
    Available,
    /// The worker is occupied with assigned work.
    Busy,
}

impl Availability {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Availability {
    type Error = ParseAvailabilityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            _ => Err(ParseAvailabilityError(value.to_owned())),
        }
    }
}

/// Error returned while parsing availability from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown availability: {0}")]
pub struct ParseAvailabilityError(pub String);

/// Field worker read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Worker identifier.
    pub id: WorkerId,
    /// Display name.
    pub name: String,
    /// Contact number.
    pub contact: String,
    /// Optional contact email.
    pub email: Option<String>,
    /// Department the worker belongs to.
    pub department: DepartmentCode,
    /// Job designation.
    pub designation: Option<String>,
    /// Current availability.
    pub availability: Availability,
}

/// Validated payload for creating a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerDraft {
    name: String,
    contact: String,
    email: Option<String>,
    department: DepartmentCode,
    designation: Option<String>,
}

impl WorkerDraft {
    /// Creates a draft with required fields.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryDomainError`] when the name or contact number
    /// is blank.
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        department: DepartmentCode,
    ) -> Result<Self, DirectoryDomainError> {
        let name = validated_name(name)?;
        let contact = contact.into();
        let normalized = contact.trim();
        if normalized.is_empty() {
            return Err(DirectoryDomainError::EmptyContact);
        }
        Ok(Self {
            name,
            contact: normalized.to_owned(),
            email: None,
            department,
            designation: None,
        })
    }

    /// Sets the contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let value = email.into();
        let normalized = value.trim();
        self.email = (!normalized.is_empty()).then(|| normalized.to_owned());
        self
    }

    /// Sets the designation.
    #[must_use]
    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        let value = designation.into();
        let normalized = value.trim();
        self.designation = (!normalized.is_empty()).then(|| normalized.to_owned());
        self
    }

    /// Returns the worker's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact number.
    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the contact email, if set.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the designation, if set.
    #[must_use]
    pub fn designation(&self) -> Option<&str> {
        self.designation.as_deref()
    }

    /// Returns the department code.
    #[must_use]
    pub const fn department(&self) -> &DepartmentCode {
        &self.department
    }
}

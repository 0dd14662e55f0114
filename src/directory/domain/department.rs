//! Department entity and its validated payloads.

use super::{DepartmentId, DirectoryDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized, uppercase department code.
///
/// Uniqueness across departments is the backend's invariant; the client
/// only normalizes and shape-checks the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentCode(String);

impl DepartmentCode {
    /// Creates a validated code, uppercasing the input.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::InvalidDepartmentCode`] when the
    /// trimmed value is empty or contains non-alphanumeric characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_uppercase();
        if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DirectoryDomainError::InvalidDepartmentCode(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DepartmentCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DepartmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Department read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department identifier.
    pub id: DepartmentId,
    /// Display name.
    pub name: String,
    /// Unique uppercase code.
    pub code: DepartmentCode,
    /// Free-text description.
    pub description: Option<String>,
    /// Whether the department is active.
    pub active: bool,
    /// Server-derived count of officials in the department.
    pub official_count: u32,
    /// Server-derived count of workers in the department.
    pub worker_count: u32,
}

/// Validated payload for creating a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentDraft {
    name: String,
    code: DepartmentCode,
    description: Option<String>,
}

impl DepartmentDraft {
    /// Creates a draft with a required name and code.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyName`] for a blank name or an
    /// error from [`DepartmentCode::new`] for a malformed code.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self, DirectoryDomainError> {
        let name = validated_name(name)?;
        Ok(Self {
            name,
            code: DepartmentCode::new(code)?,
            description: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then(|| normalized.to_owned());
        self
    }

    /// Returns the department name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized code.
    #[must_use]
    pub const fn code(&self) -> &DepartmentCode {
        &self.code
    }

    /// Returns the description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Partial-update payload for a department; `None` fields are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DepartmentUpdate {
    /// Replacement name, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement description, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement active flag, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl DepartmentUpdate {
    /// Returns `true` when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.active.is_none()
    }
}

pub(super) fn validated_name(name: impl Into<String>) -> Result<String, DirectoryDomainError> {
    let raw = name.into();
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(DirectoryDomainError::EmptyName);
    }
    Ok(normalized.to_owned())
}

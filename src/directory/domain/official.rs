//! Government official entity and its validated payloads.

use super::department::validated_name;
use super::{DepartmentCode, DirectoryDomainError, OfficialId};
use serde::{Deserialize, Serialize};

/// Government official read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Official {
    /// Official identifier.
    pub id: OfficialId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Department the official belongs to.
    pub department: DepartmentCode,
    /// Job designation.
    pub designation: Option<String>,
    /// Whether the account has been verified.
    pub verified: bool,
}

/// Validated payload for creating an official.
///
/// A password is mandatory on creation; edits treat an empty password as
/// "leave unchanged" (see [`OfficialUpdate`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficialDraft {
    name: String,
    email: String,
    department: DepartmentCode,
    designation: Option<String>,
    password: String,
}

impl OfficialDraft {
    /// Creates a draft with required fields.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryDomainError`] when the name is blank, the email
    /// is malformed, or the password is empty.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: DepartmentCode,
        password: impl Into<String>,
    ) -> Result<Self, DirectoryDomainError> {
        let name = validated_name(name)?;
        let email = validated_email(email)?;
        let password = password.into();
        if password.trim().is_empty() {
            return Err(DirectoryDomainError::EmptyPassword);
        }
        Ok(Self {
            name,
            email,
            department,
            designation: None,
            password,
        })
    }

    /// Sets the designation.
    #[must_use]
    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        let value = designation.into();
        let normalized = value.trim();
        self.designation = (!normalized.is_empty()).then(|| normalized.to_owned());
        self
    }

    /// Returns the official's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the department code.
    #[must_use]
    pub const fn department(&self) -> &DepartmentCode {
        &self.department
    }

    /// Returns the designation, if set.
    #[must_use]
    pub fn designation(&self) -> Option<&str> {
        self.designation.as_deref()
    }
}

/// Partial-update payload for an official; `None` fields are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OfficialUpdate {
    /// Replacement name, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement email, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement department, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentCode>,
    /// Replacement designation, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    /// Replacement password; omitted entirely when unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl OfficialUpdate {
    /// Sets the password from a form field, mapping blank input to
    /// "unchanged".
    #[must_use]
    pub fn with_password_field(mut self, password: impl Into<String>) -> Self {
        let value = password.into();
        self.password = (!value.trim().is_empty()).then_some(value);
        self
    }
}

fn validated_email(email: impl Into<String>) -> Result<String, DirectoryDomainError> {
    let raw = email.into();
    let normalized = raw.trim();
    let well_formed = normalized
        .split_once('@')
        .is_some_and(|(local, host)| !local.is_empty() && host.contains('.'));
    if !well_formed {
        return Err(DirectoryDomainError::InvalidEmail(raw));
    }
    Ok(normalized.to_owned())
}

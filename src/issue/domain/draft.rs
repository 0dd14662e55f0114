//! Issue submission draft and its local validation gate.
//!
//! A draft is raw form input. Validation runs before any network call and
//! a failed draft is handed back to the caller intact, so no user input is
//! lost on rejection.

use super::error::IssueDomainError;
use super::kinds::{Category, Priority};
use super::media::MediaAttachment;
use crate::directory::domain::DepartmentCode;

/// Minimum description length in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 5;

/// Minimum location length in characters.
pub const MIN_LOCATION_CHARS: usize = 3;

/// Raw issue submission input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    /// Issue title.
    pub title: String,
    /// Problem description.
    pub description: String,
    /// Issue category.
    pub category: Category,
    /// Priority; defaults to medium.
    pub priority: Priority,
    /// Free-text location.
    pub location: String,
    /// Target department, when the citizen picked one.
    pub department: Option<DepartmentCode>,
    /// Media files selected for upload.
    pub media: Vec<MediaAttachment>,
}

impl IssueDraft {
    /// Creates a draft from the required form fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            priority: Priority::default(),
            location: location.into(),
            department: None,
            media: Vec::new(),
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the target department.
    #[must_use]
    pub fn with_department(mut self, department: DepartmentCode) -> Self {
        self.department = Some(department);
        self
    }

    /// Adds media attachments.
    #[must_use]
    pub fn with_media(mut self, media: impl IntoIterator<Item = MediaAttachment>) -> Self {
        self.media.extend(media);
        self
    }

    /// Checks the draft against the local submission gate.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule: empty title, description shorter
    /// than [`MIN_DESCRIPTION_CHARS`], or location shorter than
    /// [`MIN_LOCATION_CHARS`].
    pub fn validate(&self) -> Result<(), IssueDomainError> {
        if self.title.trim().is_empty() {
            return Err(IssueDomainError::EmptyTitle);
        }
        let description_len = self.description.trim().chars().count();
        if description_len < MIN_DESCRIPTION_CHARS {
            return Err(IssueDomainError::DescriptionTooShort {
                min: MIN_DESCRIPTION_CHARS,
                actual: description_len,
            });
        }
        let location_len = self.location.trim().chars().count();
        if location_len < MIN_LOCATION_CHARS {
            return Err(IssueDomainError::LocationTooShort {
                min: MIN_LOCATION_CHARS,
                actual: location_len,
            });
        }
        Ok(())
    }
}

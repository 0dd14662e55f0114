//! Issue classification enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category of a civic issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Potholes, damaged pavement, signage.
    Roads,
    /// Supply interruptions, leaks, quality complaints.
    Water,
    /// Waste collection and street cleaning.
    Sanitation,
    /// Street lighting and power faults.
    Electricity,
    /// Hazards requiring urgent municipal attention.
    PublicSafety,
    /// Parks and public green spaces.
    Parks,
    /// Anything that fits no other category.
    Other,
}

impl Category {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Roads => "roads",
            Self::Water => "water",
            Self::Sanitation => "sanitation",
            Self::Electricity => "electricity",
            Self::PublicSafety => "public_safety",
            Self::Parks => "parks",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "roads" => Ok(Self::Roads),
            "water" => Ok(Self::Water),
            "sanitation" => Ok(Self::Sanitation),
            "electricity" => Ok(Self::Electricity),
            "public_safety" => Ok(Self::PublicSafety),
            "parks" => Ok(Self::Parks),
            "other" => Ok(Self::Other),
            _ => Err(ParseCategoryError(value.to_owned())),
        }
    }
}

/// Error returned while parsing categories from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

/// Priority of an issue or work order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait for routine scheduling.
    Low,
    /// Default priority for new submissions.
    #[default]
    Medium,
    /// Needs attention ahead of routine work.
    High,
    /// Safety-relevant, handle immediately.
    Critical,
}

impl Priority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Error returned while parsing priorities from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

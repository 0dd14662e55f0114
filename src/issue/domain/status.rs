//! Lifecycle status shared by issues and their work orders.
//!
//! The status a citizen sees is driven by the work order: an issue with no
//! task is always `Pending`. Transitions are monotonic along
//! `pending → assigned → in_progress → completed → reviewed → closed`,
//! with `rejected` terminal and reachable only from `pending` or
//! `assigned`. Re-assigning a different worker while `assigned` replaces
//! the assignee and is not a status transition.

use super::error::ParseLifecycleStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an issue and its work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    /// Submitted by a citizen; no work order exists yet.
    Pending,
    /// An official has assigned a worker.
    Assigned,
    /// The worker has started the work.
    InProgress,
    /// The worker has submitted completion remarks and proof.
    Completed,
    /// An official has reviewed the completed work.
    Reviewed,
    /// The issue is closed.
    Closed,
    /// An official rejected the issue before work completed.
    Rejected,
}

impl LifecycleStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Reviewed => "reviewed",
            Self::Closed => "closed",
            Self::Rejected => "rejected",
        }
    }

    /// Returns `true` when no further transition is permitted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Rejected)
    }

    /// Returns `true` when the transition to `target` is permitted.
    ///
    /// Self-transitions are not permitted; completed work never returns to
    /// an earlier state.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Assigned | Self::Rejected)
                | (
                    Self::Assigned,
                    Self::InProgress | Self::Completed | Self::Rejected
                )
                | (Self::InProgress, Self::Completed)
                | (Self::Completed, Self::Reviewed)
                | (Self::Reviewed, Self::Closed)
        )
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LifecycleStatus {
    type Error = ParseLifecycleStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "assigned" => Ok(Self::Assigned),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "reviewed" => Ok(Self::Reviewed),
            "closed" => Ok(Self::Closed),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseLifecycleStatusError(value.to_owned())),
        }
    }
}

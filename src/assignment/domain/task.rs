//! Work-order aggregate and its lifecycle operations.
//!
//! A work order opens in `Assigned` and moves forward only along the
//! shared transition table. Every operation validates before mutating, so
//! a refused call leaves the order untouched.

use super::error::AssignmentDomainError;
use super::ids::TaskId;
use crate::directory::domain::WorkerId;
use crate::issue::domain::{IssueId, LifecycleStatus, Priority};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Worker selected for an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRef {
    /// Worker identifier.
    pub id: WorkerId,
    /// Display name, snapshotted at assignment time.
    pub name: String,
}

impl WorkerRef {
    /// Creates a worker reference.
    #[must_use]
    pub fn new(id: WorkerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Parameter object for opening a work order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Assigned task identifier.
    pub id: TaskId,
    /// Issue the order answers.
    pub issue: IssueId,
    /// Selected worker.
    pub worker: WorkerRef,
    /// What the worker is expected to do.
    pub description: String,
    /// Optional extra instructions.
    pub instructions: Option<String>,
    /// Priority inherited from the issue.
    pub priority: Priority,
}

/// Work-order aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    issue: IssueId,
    assigned_to: WorkerId,
    worker_name: String,
    description: String,
    instructions: Option<String>,
    priority: Priority,
    status: LifecycleStatus,
    worker_remarks: Option<String>,
    work_proof: Option<String>,
    official_remarks: Option<String>,
    created_at: DateTime<Utc>,
    assigned_at: DateTime<Utc>,
    completion_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Opens a work order in `Assigned`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyDescription`] when the work
    /// description is blank.
    pub fn assign(new: NewTask, clock: &impl Clock) -> Result<Self, AssignmentDomainError> {
        let description = new.description.trim().to_owned();
        if description.is_empty() {
            return Err(AssignmentDomainError::EmptyDescription);
        }
        let now = clock.utc();
        Ok(Self {
            id: new.id,
            issue: new.issue,
            assigned_to: new.worker.id,
            worker_name: new.worker.name,
            description,
            instructions: new
                .instructions
                .and_then(|text| normalized_optional(&text)),
            priority: new.priority,
            status: LifecycleStatus::Assigned,
            worker_remarks: None,
            work_proof: None,
            official_remarks: None,
            created_at: now,
            assigned_at: now,
            completion_date: None,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the issue this order answers.
    #[must_use]
    pub const fn issue(&self) -> IssueId {
        self.issue
    }

    /// Returns the assigned worker.
    #[must_use]
    pub const fn assigned_to(&self) -> WorkerId {
        self.assigned_to
    }

    /// Returns the assigned worker's display name.
    #[must_use]
    pub fn worker_name(&self) -> &str {
        &self.worker_name
    }

    /// Returns the work description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the extra instructions, when given.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// Returns the order priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> LifecycleStatus {
        self.status
    }

    /// Returns the worker's completion remarks, once submitted.
    #[must_use]
    pub fn worker_remarks(&self) -> Option<&str> {
        self.worker_remarks.as_deref()
    }

    /// Returns the work proof reference, once submitted.
    #[must_use]
    pub fn work_proof(&self) -> Option<&str> {
        self.work_proof.as_deref()
    }

    /// Returns the official's review remarks, once reviewed.
    #[must_use]
    pub fn official_remarks(&self) -> Option<&str> {
        self.official_remarks.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the current worker was assigned.
    #[must_use]
    pub const fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    /// Returns the completion timestamp, once completed.
    #[must_use]
    pub const fn completion_date(&self) -> Option<DateTime<Utc>> {
        self.completion_date
    }

    /// Marks the order as started by the worker.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStatusTransition`] unless
    /// the order is `Assigned`.
    pub fn start_work(&mut self) -> Result<(), AssignmentDomainError> {
        self.transition(LifecycleStatus::InProgress)
    }

    /// Records the worker's completion remarks and proof.
    ///
    /// Permitted from `Assigned` or `InProgress`; small jobs are often
    /// finished without ever being marked started.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyRemarks`] for blank remarks
    /// or [`AssignmentDomainError::InvalidStatusTransition`] from any
    /// other state.
    pub fn submit_completion(
        &mut self,
        remarks: impl Into<String>,
        proof: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        let remarks = validated_remarks(remarks)?;
        self.transition(LifecycleStatus::Completed)?;
        self.worker_remarks = Some(remarks);
        self.work_proof = proof.and_then(|text| normalized_optional(&text));
        self.completion_date = Some(clock.utc());
        Ok(())
    }

    /// Records the official's review of completed work.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyRemarks`] for blank remarks
    /// or [`AssignmentDomainError::InvalidStatusTransition`] unless the
    /// order is `Completed`.
    pub fn review(&mut self, remarks: impl Into<String>) -> Result<(), AssignmentDomainError> {
        let remarks = validated_remarks(remarks)?;
        self.transition(LifecycleStatus::Reviewed)?;
        self.official_remarks = Some(remarks);
        Ok(())
    }

    /// Closes a reviewed order.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidStatusTransition`] unless
    /// the order is `Reviewed`.
    pub fn close(&mut self) -> Result<(), AssignmentDomainError> {
        self.transition(LifecycleStatus::Closed)
    }

    /// Rejects the order before work has started, recording the official's
    /// reason as the closing remarks.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyReason`] for a blank reason
    /// or [`AssignmentDomainError::InvalidStatusTransition`] once work is
    /// under way or finished.
    pub fn reject(&mut self, reason: impl Into<String>) -> Result<(), AssignmentDomainError> {
        let reason = reason.into().trim().to_owned();
        if reason.is_empty() {
            return Err(AssignmentDomainError::EmptyReason);
        }
        self.transition(LifecycleStatus::Rejected)?;
        self.official_remarks = Some(reason);
        Ok(())
    }

    fn transition(&mut self, to: LifecycleStatus) -> Result<(), AssignmentDomainError> {
        if !self.status.can_transition_to(to) {
            return Err(AssignmentDomainError::InvalidStatusTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

/// Status a citizen sees for an issue, derived from its work order.
///
/// An issue with no live order is always `Pending`.
#[must_use]
pub fn displayed_status(task: Option<&Task>) -> LifecycleStatus {
    task.map_or(LifecycleStatus::Pending, Task::status)
}

fn validated_remarks(remarks: impl Into<String>) -> Result<String, AssignmentDomainError> {
    let normalized = remarks.into().trim().to_owned();
    if normalized.is_empty() {
        return Err(AssignmentDomainError::EmptyRemarks);
    }
    Ok(normalized)
}

fn normalized_optional(text: &str) -> Option<String> {
    let normalized = text.trim();
    (!normalized.is_empty()).then(|| normalized.to_owned())
}

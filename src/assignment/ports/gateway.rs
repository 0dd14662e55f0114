//! Gateway port for work-order reads and mutations.

use crate::assignment::domain::{Task, TaskId, WorkerRef};
use crate::gateway::{ApiResult, IdempotencyKey};
use crate::issue::domain::{Issue, IssueId, LifecycleStatus, Priority};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Assignment payload sent when opening or replacing a work order.
///
/// The backend keeps at most one live order per issue; sending this for an
/// issue that already has one replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskAssignment {
    /// Issue the order answers.
    pub issue: IssueId,
    /// Selected worker.
    pub worker: WorkerRef,
    /// What the worker is expected to do.
    pub description: String,
    /// Optional extra instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Priority inherited from the issue.
    pub priority: Priority,
}

/// Partial update sent as the worker progresses an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskProgress {
    /// Requested status.
    pub status: LifecycleStatus,
    /// Completion remarks, when completing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_remarks: Option<String>,
    /// Work proof reference, when completing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_proof: Option<String>,
    /// Completion timestamp, when completing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
}

impl TaskProgress {
    /// Builds the payload for a bare status move.
    #[must_use]
    pub const fn status_only(status: LifecycleStatus) -> Self {
        Self {
            status,
            worker_remarks: None,
            work_proof: None,
            completion_date: None,
        }
    }
}

/// Review payload sent by an official for completed work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskReview {
    /// Review remarks.
    pub official_remarks: String,
}

/// Rejection payload sent by an official retiring an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRejection {
    /// Why the order was rejected.
    pub reason: String,
}

/// Remote work-order store contract.
#[async_trait]
pub trait AssignmentGateway: Send + Sync {
    /// Fetches the work orders visible to the authenticated user.
    async fn fetch_tasks(&self, cancel: &CancellationToken) -> ApiResult<Vec<Task>>;

    /// Opens or replaces the order for an issue; the idempotency key
    /// deduplicates retries.
    async fn upsert_task(
        &self,
        assignment: &TaskAssignment,
        key: &IdempotencyKey,
    ) -> ApiResult<Task>;

    /// Applies a progress update to an order; returns the updated order.
    async fn update_task(&self, task: TaskId, progress: &TaskProgress) -> ApiResult<Task>;

    /// Records an official's review; returns the updated order.
    async fn review_task(&self, task: TaskId, review: &TaskReview) -> ApiResult<Task>;

    /// Rejects an order before work starts; returns the retired order.
    async fn reject_task(&self, task: TaskId, rejection: &TaskRejection) -> ApiResult<Task>;

    /// Rejects an issue that has no work order yet, carrying the
    /// official's reason; returns the updated issue.
    async fn reject_issue(&self, issue: IssueId, reason: &str) -> ApiResult<Issue>;
}

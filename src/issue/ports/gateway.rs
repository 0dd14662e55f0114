//! Gateway port for issue reads and mutations.

use crate::directory::domain::DepartmentCode;
use crate::gateway::{ApiResult, IdempotencyKey};
use crate::issue::domain::{Category, Issue, IssueId, MediaRef, Priority};
use async_trait::async_trait;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Accepted submission payload sent to the backend.
///
/// Media files have already been resolved to references by the time this
/// payload exists; it never carries raw bytes besides inline fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSubmission {
    /// Issue title.
    pub title: String,
    /// Problem description.
    pub description: String,
    /// Issue category.
    pub category: Category,
    /// Submission priority.
    pub priority: Priority,
    /// Free-text location.
    pub location: String,
    /// Target department, when chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentCode>,
    /// Resolved media references.
    pub media: Vec<MediaRef>,
}

/// Remote issue store contract.
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Fetches the issues visible to the authenticated user.
    async fn fetch_issues(&self, cancel: &CancellationToken) -> ApiResult<Vec<Issue>>;

    /// Submits a new issue; the idempotency key deduplicates retries.
    async fn submit_issue(
        &self,
        submission: &IssueSubmission,
        key: &IdempotencyKey,
    ) -> ApiResult<Issue>;

    /// Toggles the authenticated citizen's upvote; returns the updated
    /// issue.
    async fn toggle_upvote(&self, issue: IssueId) -> ApiResult<Issue>;

    /// Adds a comment by the authenticated citizen; returns the updated
    /// issue.
    async fn add_comment(&self, issue: IssueId, text: &str) -> ApiResult<Issue>;
}

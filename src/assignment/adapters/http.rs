//! HTTP adapter for the assignment gateway.

use crate::assignment::domain::{Task, TaskId};
use crate::assignment::ports::{
    AssignmentGateway, TaskAssignment, TaskProgress, TaskRejection, TaskReview,
};
use crate::gateway::{ApiClient, ApiResult, IdempotencyKey};
use crate::issue::domain::{Issue, IssueId, LifecycleStatus};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Assignment gateway backed by the remote REST API.
#[derive(Debug, Clone)]
pub struct HttpAssignmentGateway {
    client: Arc<ApiClient>,
}

impl HttpAssignmentGateway {
    /// Creates the adapter over a shared API client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct RejectionBody {
    status: LifecycleStatus,
    rejection_reason: String,
}

#[async_trait]
impl AssignmentGateway for HttpAssignmentGateway {
    async fn fetch_tasks(&self, cancel: &CancellationToken) -> ApiResult<Vec<Task>> {
        self.client.get("/tasks", Some(cancel)).await
    }

    async fn upsert_task(
        &self,
        assignment: &TaskAssignment,
        key: &IdempotencyKey,
    ) -> ApiResult<Task> {
        self.client.post("/tasks", assignment, Some(key)).await
    }

    async fn update_task(&self, task: TaskId, progress: &TaskProgress) -> ApiResult<Task> {
        self.client.patch(&format!("/tasks/{task}"), progress).await
    }

    async fn review_task(&self, task: TaskId, review: &TaskReview) -> ApiResult<Task> {
        self.client
            .patch(&format!("/tasks/{task}/review"), review)
            .await
    }

    async fn reject_task(&self, task: TaskId, rejection: &TaskRejection) -> ApiResult<Task> {
        self.client
            .patch(&format!("/tasks/{task}/reject"), rejection)
            .await
    }

    async fn reject_issue(&self, issue: IssueId, reason: &str) -> ApiResult<Issue> {
        self.client
            .patch(
                &format!("/posts/{issue}"),
                &RejectionBody {
                    status: LifecycleStatus::Rejected,
                    rejection_reason: reason.to_owned(),
                },
            )
            .await
    }
}

//! In-memory assignment gateway for tests.
//!
//! Mirrors the backend's work-order rules: at most one live order per
//! issue, transitions enforced by the shared table, and every mutating
//! call recorded for assertion.

use crate::assignment::domain::{NewTask, Task, TaskId, WorkerRef};
use crate::assignment::ports::{
    AssignmentGateway, TaskAssignment, TaskProgress, TaskRejection, TaskReview,
};
use crate::gateway::{ApiError, ApiResult, IdempotencyKey};
use crate::issue::domain::{Issue, IssueId, LifecycleStatus};
use async_trait::async_trait;
use mockable::DefaultClock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio_util::sync::CancellationToken;

/// Thread-safe in-memory assignment gateway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentGateway {
    state: Arc<RwLock<AssignmentState>>,
}

#[derive(Debug, Default)]
struct AssignmentState {
    tasks: HashMap<TaskId, Task>,
    by_issue: HashMap<IssueId, TaskId>,
    issues: HashMap<IssueId, Issue>,
    calls: Vec<String>,
}

impl InMemoryAssignmentGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an issue into the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the backing lock is poisoned.
    pub fn seed_issue(&self, issue: Issue) -> ApiResult<()> {
        let mut state = self.write()?;
        state.issues.insert(issue.id(), issue);
        Ok(())
    }

    /// Returns the mutating calls recorded so far.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the backing lock is poisoned.
    pub fn recorded_calls(&self) -> ApiResult<Vec<String>> {
        Ok(self.read()?.calls.clone())
    }

    /// Returns the stored issue, when one was seeded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the backing lock is poisoned.
    pub fn issue(&self, id: IssueId) -> ApiResult<Option<Issue>> {
        Ok(self.read()?.issues.get(&id).cloned())
    }

    /// Returns the live order for an issue, when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the backing lock is poisoned.
    pub fn task_for_issue(&self, issue: IssueId) -> ApiResult<Option<Task>> {
        let state = self.read()?;
        Ok(state
            .by_issue
            .get(&issue)
            .and_then(|id| state.tasks.get(id))
            .cloned())
    }

    fn read(&self) -> ApiResult<std::sync::RwLockReadGuard<'_, AssignmentState>> {
        self.state
            .read()
            .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> ApiResult<std::sync::RwLockWriteGuard<'_, AssignmentState>> {
        self.state
            .write()
            .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))
    }
}

fn conflict(message: impl Into<String>) -> ApiError {
    ApiError::Rejected {
        status: 409,
        message: message.into(),
    }
}

fn not_found(what: &str) -> ApiError {
    ApiError::Rejected {
        status: 404,
        message: format!("{what} not found"),
    }
}

#[async_trait]
impl AssignmentGateway for InMemoryAssignmentGateway {
    async fn fetch_tasks(&self, cancel: &CancellationToken) -> ApiResult<Vec<Task>> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let state = self.read()?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(tasks)
    }

    async fn upsert_task(
        &self,
        assignment: &TaskAssignment,
        _key: &IdempotencyKey,
    ) -> ApiResult<Task> {
        let mut state = self.write()?;
        state.calls.push("POST /tasks".to_owned());

        if let Some(previous) = state.by_issue.remove(&assignment.issue) {
            state.tasks.remove(&previous);
        }
        let task = Task::assign(
            NewTask {
                id: TaskId::new(),
                issue: assignment.issue,
                worker: WorkerRef::new(assignment.worker.id, assignment.worker.name.clone()),
                description: assignment.description.clone(),
                instructions: assignment.instructions.clone(),
                priority: assignment.priority,
            },
            &DefaultClock,
        )
        .map_err(|err| conflict(err.to_string()))?;

        if let Some(issue) = state.issues.get_mut(&assignment.issue)
            && issue.status() == LifecycleStatus::Pending
        {
            issue
                .apply_status(LifecycleStatus::Assigned)
                .map_err(|err| conflict(err.to_string()))?;
        }
        state.by_issue.insert(assignment.issue, task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update_task(&self, task: TaskId, progress: &TaskProgress) -> ApiResult<Task> {
        let mut state = self.write()?;
        state.calls.push(format!("PATCH /tasks/{task}"));
        let stored = state.tasks.get_mut(&task).ok_or_else(|| not_found("Task"))?;
        match progress.status {
            LifecycleStatus::InProgress => {
                stored.start_work().map_err(|err| conflict(err.to_string()))?;
            }
            LifecycleStatus::Completed => {
                let remarks = progress
                    .worker_remarks
                    .clone()
                    .ok_or_else(|| conflict("Completion remarks are required"))?;
                stored
                    .submit_completion(remarks, progress.work_proof.clone(), &DefaultClock)
                    .map_err(|err| conflict(err.to_string()))?;
            }
            LifecycleStatus::Closed => {
                stored.close().map_err(|err| conflict(err.to_string()))?;
            }
            other => {
                return Err(conflict(format!("Cannot set a task to '{other}' directly")));
            }
        }
        Ok(stored.clone())
    }

    async fn review_task(&self, task: TaskId, review: &TaskReview) -> ApiResult<Task> {
        let mut state = self.write()?;
        state.calls.push(format!("PATCH /tasks/{task}/review"));
        let stored = state.tasks.get_mut(&task).ok_or_else(|| not_found("Task"))?;
        stored
            .review(review.official_remarks.clone())
            .map_err(|err| conflict(err.to_string()))?;
        Ok(stored.clone())
    }

    async fn reject_task(&self, task: TaskId, rejection: &TaskRejection) -> ApiResult<Task> {
        let mut state = self.write()?;
        state.calls.push(format!("PATCH /tasks/{task}/reject"));
        let stored = state.tasks.get_mut(&task).ok_or_else(|| not_found("Task"))?;
        stored
            .reject(rejection.reason.clone())
            .map_err(|err| conflict(err.to_string()))?;
        let retired = stored.clone();
        if let Some(issue) = state.issues.get_mut(&retired.issue())
            && issue.status().can_transition_to(LifecycleStatus::Rejected)
        {
            issue
                .apply_status(LifecycleStatus::Rejected)
                .map_err(|err| conflict(err.to_string()))?;
        }
        Ok(retired)
    }

    async fn reject_issue(&self, issue: IssueId, reason: &str) -> ApiResult<Issue> {
        let mut state = self.write()?;
        state.calls.push(format!("PATCH /posts/{issue}"));
        if reason.trim().is_empty() {
            return Err(ApiError::Rejected {
                status: 422,
                message: "Rejection reason is required".to_owned(),
            });
        }
        let stored = state
            .issues
            .get_mut(&issue)
            .ok_or_else(|| not_found("Post"))?;
        stored
            .apply_status(LifecycleStatus::Rejected)
            .map_err(|err| conflict(err.to_string()))?;
        Ok(stored.clone())
    }
}

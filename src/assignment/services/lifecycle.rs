//! Service layer for the work-order lifecycle.
//!
//! Officials assign, review, close, and reject; workers start and complete.
//! Every operation validates the transition on a local copy before calling
//! out, so a refused move issues zero calls, and the local order is only
//! replaced by the server's response on success.

use crate::assignment::domain::{AssignmentDomainError, Task, WorkerRef};
use crate::assignment::ports::{
    AssignmentGateway, TaskAssignment, TaskProgress, TaskRejection, TaskReview,
};
use crate::gateway::idempotency::IdempotencyKeyError;
use crate::gateway::{ApiError, CurrentUser, IdempotencyKey, Role};
use crate::issue::domain::{Issue, LifecycleStatus};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Service-level errors for work-order management.
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// The acting user's role does not permit the operation.
    #[error("role '{actor}' may not {action}")]
    UnauthorizedActor {
        /// Role held by the acting user.
        actor: Role,
        /// Human-readable description of the refused operation.
        action: &'static str,
    },

    /// The assignment form was submitted with no worker selected.
    #[error("select a worker before assigning")]
    MissingWorkerSelection,

    /// Direct rejection was attempted on an issue that already has a work
    /// order; the order itself must be rejected instead.
    #[error("issue is '{status}'; only a pending issue can be rejected directly")]
    IssueNotPending {
        /// Status at the time of the attempt.
        status: LifecycleStatus,
    },

    /// Local validation failed; no call was made.
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),

    /// The payload could not be prepared for sending.
    #[error("failed to prepare assignment")]
    Preparation(#[from] IdempotencyKeyError),

    /// The remote API rejected the call or transport failed.
    #[error(transparent)]
    Gateway(#[from] ApiError),
}

/// Result type for work-order service operations.
pub type AssignmentResult<T> = Result<T, AssignmentError>;

/// Work-order orchestration service.
#[derive(Clone)]
pub struct AssignmentService<G, C>
where
    G: AssignmentGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> AssignmentService<G, C>
where
    G: AssignmentGateway,
    C: Clock + Send + Sync,
{
    /// Creates an assignment service over the given gateway and clock.
    #[must_use]
    pub const fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self { gateway, clock }
    }

    /// Fetches the work orders visible to officials and workers.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] on refusal, rejection, transport
    /// failure, or cancellation.
    pub async fn tasks(
        &self,
        actor: &CurrentUser,
        cancel: &CancellationToken,
    ) -> AssignmentResult<Vec<Task>> {
        require(
            actor,
            &[Role::Official, Role::Worker, Role::Admin],
            "list tasks",
        )?;
        Ok(self.gateway.fetch_tasks(cancel).await?)
    }

    /// Assigns a worker to an issue, opening or replacing its work order.
    ///
    /// The issue must still be `Pending` or `Assigned`; assigning again
    /// while an order exists replaces it, last write wins. The selection
    /// is checked before anything else, so an empty worker picker issues
    /// zero calls.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] on refusal, missing selection, an
    /// unassignable issue, rejection, or transport failure.
    pub async fn assign_worker(
        &self,
        actor: &CurrentUser,
        issue: &Issue,
        selection: Option<WorkerRef>,
        description: impl Into<String>,
        instructions: Option<String>,
    ) -> AssignmentResult<Task> {
        require(actor, &[Role::Official], "assign workers")?;
        let worker = selection.ok_or(AssignmentError::MissingWorkerSelection)?;
        if !matches!(
            issue.status(),
            LifecycleStatus::Pending | LifecycleStatus::Assigned
        ) {
            return Err(AssignmentDomainError::InvalidStatusTransition {
                from: issue.status(),
                to: LifecycleStatus::Assigned,
            }
            .into());
        }
        let description = description.into().trim().to_owned();
        if description.is_empty() {
            return Err(AssignmentDomainError::EmptyDescription.into());
        }

        let assignment = TaskAssignment {
            issue: issue.id(),
            worker,
            description,
            instructions: instructions.and_then(|text| {
                let normalized = text.trim();
                (!normalized.is_empty()).then(|| normalized.to_owned())
            }),
            priority: issue.priority(),
        };
        let key = IdempotencyKey::for_payload(&assignment)?;
        Ok(self.gateway.upsert_task(&assignment, &key).await?)
    }

    /// Marks an order as started by the assigned worker.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] on refusal, an invalid transition,
    /// rejection, or transport failure; the local order is untouched.
    pub async fn start_work(&self, actor: &CurrentUser, task: &mut Task) -> AssignmentResult<()> {
        require(actor, &[Role::Worker], "start work")?;
        let mut staged = task.clone();
        staged.start_work()?;
        let updated = self
            .gateway
            .update_task(
                task.id(),
                &TaskProgress::status_only(LifecycleStatus::InProgress),
            )
            .await?;
        *task = updated;
        Ok(())
    }

    /// Submits the worker's completion remarks and proof.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] on refusal, blank remarks, an invalid
    /// transition, rejection, or transport failure; the local order is
    /// untouched.
    pub async fn submit_completion(
        &self,
        actor: &CurrentUser,
        task: &mut Task,
        remarks: impl Into<String>,
        proof: Option<String>,
    ) -> AssignmentResult<()> {
        require(actor, &[Role::Worker], "submit completion")?;
        let mut staged = task.clone();
        staged.submit_completion(remarks, proof, self.clock.as_ref())?;
        let progress = TaskProgress {
            status: LifecycleStatus::Completed,
            worker_remarks: staged.worker_remarks().map(ToOwned::to_owned),
            work_proof: staged.work_proof().map(ToOwned::to_owned),
            completion_date: staged.completion_date(),
        };
        let updated = self.gateway.update_task(task.id(), &progress).await?;
        *task = updated;
        Ok(())
    }

    /// Records an official's review of completed work.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] on refusal, blank remarks, an invalid
    /// transition, rejection, or transport failure; the local order is
    /// untouched.
    pub async fn review(
        &self,
        actor: &CurrentUser,
        task: &mut Task,
        remarks: impl Into<String>,
    ) -> AssignmentResult<()> {
        require(actor, &[Role::Official], "review work")?;
        let mut staged = task.clone();
        let remarks = remarks.into();
        staged.review(remarks.clone())?;
        let review = TaskReview {
            official_remarks: remarks.trim().to_owned(),
        };
        let updated = self.gateway.review_task(task.id(), &review).await?;
        *task = updated;
        Ok(())
    }

    /// Closes a reviewed order.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] on refusal, an invalid transition,
    /// rejection, or transport failure; the local order is untouched.
    pub async fn close(&self, actor: &CurrentUser, task: &mut Task) -> AssignmentResult<()> {
        require(actor, &[Role::Official], "close tasks")?;
        let mut staged = task.clone();
        staged.close()?;
        let updated = self
            .gateway
            .update_task(
                task.id(),
                &TaskProgress::status_only(LifecycleStatus::Closed),
            )
            .await?;
        *task = updated;
        Ok(())
    }

    /// Rejects an order before work starts, retiring it with the
    /// official's reason.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] on refusal, a blank reason, an invalid
    /// transition, rejection, or transport failure; the local order is
    /// untouched.
    pub async fn reject_order(
        &self,
        actor: &CurrentUser,
        task: &mut Task,
        reason: impl Into<String>,
    ) -> AssignmentResult<()> {
        require(actor, &[Role::Official], "reject tasks")?;
        let reason = reason.into();
        let mut staged = task.clone();
        staged.reject(reason.clone())?;
        let rejection = TaskRejection {
            reason: reason.trim().to_owned(),
        };
        let updated = self.gateway.reject_task(task.id(), &rejection).await?;
        *task = updated;
        Ok(())
    }

    /// Rejects a pending issue that has no work order.
    ///
    /// An issue whose order already exists is rejected through
    /// [`Self::reject_order`], which retires the order as well.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError`] on refusal, a non-pending issue, a
    /// blank reason, rejection, or transport failure; the local issue is
    /// untouched.
    pub async fn reject_pending(
        &self,
        actor: &CurrentUser,
        issue: &mut Issue,
        reason: impl Into<String>,
    ) -> AssignmentResult<()> {
        require(actor, &[Role::Official], "reject issues")?;
        if issue.status() != LifecycleStatus::Pending {
            return Err(AssignmentError::IssueNotPending {
                status: issue.status(),
            });
        }
        let reason = reason.into().trim().to_owned();
        if reason.is_empty() {
            return Err(AssignmentDomainError::EmptyReason.into());
        }
        let updated = self.gateway.reject_issue(issue.id(), &reason).await?;
        *issue = updated;
        Ok(())
    }
}

fn require(
    actor: &CurrentUser,
    allowed: &[Role],
    action: &'static str,
) -> Result<(), AssignmentError> {
    if allowed.iter().any(|role| actor.has_role(*role)) {
        return Ok(());
    }
    Err(AssignmentError::UnauthorizedActor {
        actor: actor.role,
        action,
    })
}

//! Service layer for department, official, and worker administration.

use crate::directory::domain::{
    ConfirmedDeletion, Department, DepartmentDraft, DepartmentId, DepartmentUpdate,
    DirectoryDomainError, Official, OfficialDraft, OfficialId, OfficialUpdate, PendingDeletion,
    Worker, WorkerDraft, WorkerId,
};
use crate::directory::ports::DirectoryGateway;
use crate::gateway::{ApiError, CurrentUser, Role};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Service-level errors for directory administration.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The acting user's role does not permit the operation.
    #[error("role '{actor}' may not {action}")]
    UnauthorizedActor {
        /// Role held by the acting user.
        actor: Role,
        /// Human-readable description of the refused operation.
        action: &'static str,
    },

    /// Local payload validation failed; no call was made.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),

    /// The remote API rejected the call or transport failed.
    #[error(transparent)]
    Gateway(#[from] ApiError),
}

/// Result type for directory service operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory administration service.
///
/// Admins manage departments and officials; officials and admins manage
/// workers. Deletion requires the typed confirmation produced by
/// [`Self::request_deletion`], so cancelling a confirmation dialog issues
/// zero calls.
#[derive(Clone)]
pub struct DirectoryService<G>
where
    G: DirectoryGateway,
{
    gateway: Arc<G>,
}

impl<G> DirectoryService<G>
where
    G: DirectoryGateway,
{
    /// Creates a directory service over the given gateway.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Stages a deletion for explicit confirmation.
    #[must_use]
    pub const fn request_deletion<Id>(id: Id) -> PendingDeletion<Id> {
        PendingDeletion::new(id)
    }

    /// Lists departments for the admin dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn departments(
        &self,
        actor: &CurrentUser,
        cancel: &CancellationToken,
    ) -> DirectoryResult<Vec<Department>> {
        require(actor, &[Role::Admin], "list departments")?;
        Ok(self.gateway.fetch_departments(cancel).await?)
    }

    /// Lists publicly visible departments; no role requirement.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Gateway`] on rejection or transport
    /// failure.
    pub async fn public_departments(
        &self,
        cancel: &CancellationToken,
    ) -> DirectoryResult<Vec<Department>> {
        Ok(self.gateway.fetch_departments_public(cancel).await?)
    }

    /// Creates a department from a validated draft.
    ///
    /// A duplicate-code conflict is the server's call; the rejection
    /// message passes through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn create_department(
        &self,
        actor: &CurrentUser,
        draft: &DepartmentDraft,
    ) -> DirectoryResult<Department> {
        require(actor, &[Role::Admin], "create departments")?;
        Ok(self.gateway.create_department(draft).await?)
    }

    /// Applies a partial update to a department.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn update_department(
        &self,
        actor: &CurrentUser,
        id: DepartmentId,
        update: &DepartmentUpdate,
    ) -> DirectoryResult<Department> {
        require(actor, &[Role::Admin], "edit departments")?;
        Ok(self.gateway.update_department(id, update).await?)
    }

    /// Deletes a department after explicit confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn delete_department(
        &self,
        actor: &CurrentUser,
        deletion: ConfirmedDeletion<DepartmentId>,
    ) -> DirectoryResult<()> {
        require(actor, &[Role::Admin], "delete departments")?;
        Ok(self.gateway.delete_department(deletion).await?)
    }

    /// Lists government officials.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn officials(
        &self,
        actor: &CurrentUser,
        cancel: &CancellationToken,
    ) -> DirectoryResult<Vec<Official>> {
        require(actor, &[Role::Admin], "list officials")?;
        Ok(self.gateway.fetch_officials(cancel).await?)
    }

    /// Creates an official from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn create_official(
        &self,
        actor: &CurrentUser,
        draft: &OfficialDraft,
    ) -> DirectoryResult<Official> {
        require(actor, &[Role::Admin], "create officials")?;
        Ok(self.gateway.create_official(draft).await?)
    }

    /// Applies a partial update to an official.
    ///
    /// An empty password field in the originating form maps to an omitted
    /// password here, leaving the stored credential unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn update_official(
        &self,
        actor: &CurrentUser,
        id: OfficialId,
        update: &OfficialUpdate,
    ) -> DirectoryResult<Official> {
        require(actor, &[Role::Admin], "edit officials")?;
        Ok(self.gateway.update_official(id, update).await?)
    }

    /// Deletes an official after explicit confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn delete_official(
        &self,
        actor: &CurrentUser,
        deletion: ConfirmedDeletion<OfficialId>,
    ) -> DirectoryResult<()> {
        require(actor, &[Role::Admin], "delete officials")?;
        Ok(self.gateway.delete_official(deletion).await?)
    }

    /// Lists field workers.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn workers(
        &self,
        actor: &CurrentUser,
        cancel: &CancellationToken,
    ) -> DirectoryResult<Vec<Worker>> {
        require(actor, &[Role::Official, Role::Admin], "list workers")?;
        Ok(self.gateway.fetch_workers(cancel).await?)
    }

    /// Creates a worker from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn create_worker(
        &self,
        actor: &CurrentUser,
        draft: &WorkerDraft,
    ) -> DirectoryResult<Worker> {
        require(actor, &[Role::Official, Role::Admin], "create workers")?;
        Ok(self.gateway.create_worker(draft).await?)
    }

    /// Deletes a worker after explicit confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on refusal, rejection, or transport
    /// failure.
    pub async fn delete_worker(
        &self,
        actor: &CurrentUser,
        deletion: ConfirmedDeletion<WorkerId>,
    ) -> DirectoryResult<()> {
        require(actor, &[Role::Official, Role::Admin], "delete workers")?;
        Ok(self.gateway.delete_worker(deletion).await?)
    }
}

fn require(
    actor: &CurrentUser,
    allowed: &[Role],
    action: &'static str,
) -> Result<(), DirectoryError> {
    if allowed.iter().any(|role| actor.has_role(*role)) {
        return Ok(());
    }
    Err(DirectoryError::UnauthorizedActor {
        actor: actor.role,
        action,
    })
}

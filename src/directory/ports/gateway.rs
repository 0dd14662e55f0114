//! Gateway port for directory reads and mutations.

use crate::directory::domain::{
    ConfirmedDeletion, Department, DepartmentDraft, DepartmentId, DepartmentUpdate, Official,
    OfficialDraft, OfficialId, OfficialUpdate, Worker, WorkerDraft, WorkerId,
};
use crate::gateway::ApiResult;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Remote directory contract.
///
/// Every read takes a cancellation token so a stale response can be
/// discarded when the initiating view has gone away. Deletes accept only
/// confirmed values, making an unconfirmed destructive call unrepresentable.
#[async_trait]
pub trait DirectoryGateway: Send + Sync {
    /// Lists departments visible to the authenticated admin.
    async fn fetch_departments(&self, cancel: &CancellationToken) -> ApiResult<Vec<Department>>;

    /// Lists publicly visible departments; the one unauthenticated read.
    async fn fetch_departments_public(
        &self,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<Department>>;

    /// Creates a department.
    ///
    /// Code uniqueness is enforced server-side; a conflict arrives as a
    /// rejection whose message is surfaced verbatim.
    async fn create_department(&self, draft: &DepartmentDraft) -> ApiResult<Department>;

    /// Applies a partial update to a department.
    async fn update_department(
        &self,
        id: DepartmentId,
        update: &DepartmentUpdate,
    ) -> ApiResult<Department>;

    /// Deletes a department. Irreversible from the client's perspective.
    async fn delete_department(&self, deletion: ConfirmedDeletion<DepartmentId>) -> ApiResult<()>;

    /// Lists government officials.
    async fn fetch_officials(&self, cancel: &CancellationToken) -> ApiResult<Vec<Official>>;

    /// Creates an official.
    async fn create_official(&self, draft: &OfficialDraft) -> ApiResult<Official>;

    /// Applies a partial update to an official.
    async fn update_official(&self, id: OfficialId, update: &OfficialUpdate)
    -> ApiResult<Official>;

    /// Deletes an official. Irreversible from the client's perspective.
    async fn delete_official(&self, deletion: ConfirmedDeletion<OfficialId>) -> ApiResult<()>;

    /// Lists field workers.
    async fn fetch_workers(&self, cancel: &CancellationToken) -> ApiResult<Vec<Worker>>;

    /// Creates a worker.
    async fn create_worker(&self, draft: &WorkerDraft) -> ApiResult<Worker>;

    /// Deletes a worker. Irreversible from the client's perspective.
    async fn delete_worker(&self, deletion: ConfirmedDeletion<WorkerId>) -> ApiResult<()>;
}

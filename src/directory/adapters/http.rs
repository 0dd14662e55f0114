//! HTTP adapter for the directory gateway.

use crate::directory::domain::{
    ConfirmedDeletion, Department, DepartmentDraft, DepartmentId, DepartmentUpdate, Official,
    OfficialDraft, OfficialId, OfficialUpdate, Worker, WorkerDraft, WorkerId,
};
use crate::directory::ports::DirectoryGateway;
use crate::gateway::{ApiClient, ApiResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Directory gateway backed by the remote REST API.
#[derive(Debug, Clone)]
pub struct HttpDirectoryGateway {
    client: Arc<ApiClient>,
}

impl HttpDirectoryGateway {
    /// Creates the adapter over a shared API client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DirectoryGateway for HttpDirectoryGateway {
    async fn fetch_departments(&self, cancel: &CancellationToken) -> ApiResult<Vec<Department>> {
        self.client.get("/admin/departments", Some(cancel)).await
    }

    async fn fetch_departments_public(
        &self,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<Department>> {
        self.client
            .get_public("/admin/departments/public", Some(cancel))
            .await
    }

    async fn create_department(&self, draft: &DepartmentDraft) -> ApiResult<Department> {
        self.client.post("/admin/departments", draft, None).await
    }

    async fn update_department(
        &self,
        id: DepartmentId,
        update: &DepartmentUpdate,
    ) -> ApiResult<Department> {
        self.client
            .put(&format!("/admin/departments/{id}"), update)
            .await
    }

    async fn delete_department(&self, deletion: ConfirmedDeletion<DepartmentId>) -> ApiResult<()> {
        self.client
            .delete(&format!("/admin/departments/{}", deletion.into_id()))
            .await
    }

    async fn fetch_officials(&self, cancel: &CancellationToken) -> ApiResult<Vec<Official>> {
        self.client.get("/admin/officials", Some(cancel)).await
    }

    async fn create_official(&self, draft: &OfficialDraft) -> ApiResult<Official> {
        self.client.post("/admin/officials", draft, None).await
    }

    async fn update_official(
        &self,
        id: OfficialId,
        update: &OfficialUpdate,
    ) -> ApiResult<Official> {
        self.client
            .put(&format!("/admin/officials/{id}"), update)
            .await
    }

    async fn delete_official(&self, deletion: ConfirmedDeletion<OfficialId>) -> ApiResult<()> {
        self.client
            .delete(&format!("/admin/officials/{}", deletion.into_id()))
            .await
    }

    async fn fetch_workers(&self, cancel: &CancellationToken) -> ApiResult<Vec<Worker>> {
        self.client.get("/tasks/workers", Some(cancel)).await
    }

    async fn create_worker(&self, draft: &WorkerDraft) -> ApiResult<Worker> {
        self.client.post("/tasks/workers", draft, None).await
    }

    async fn delete_worker(&self, deletion: ConfirmedDeletion<WorkerId>) -> ApiResult<()> {
        self.client
            .delete(&format!("/tasks/workers/{}", deletion.into_id()))
            .await
    }
}

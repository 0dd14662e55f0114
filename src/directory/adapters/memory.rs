//! In-memory directory gateway for tests.
//!
//! Mirrors the backend's observable behaviour: department code uniqueness
//! is rejected with a conflict message, deletes remove exactly the named
//! entity, and every mutating call is recorded so tests can assert call
//! counts.

use crate::directory::domain::{
    Availability, ConfirmedDeletion, Department, DepartmentDraft, DepartmentId, DepartmentUpdate,
    Official, OfficialDraft, OfficialId, OfficialUpdate, Worker, WorkerDraft, WorkerId,
};
use crate::directory::ports::DirectoryGateway;
use crate::gateway::{ApiError, ApiResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio_util::sync::CancellationToken;

/// Thread-safe in-memory directory gateway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectoryGateway {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    departments: HashMap<DepartmentId, Department>,
    officials: HashMap<OfficialId, Official>,
    workers: HashMap<WorkerId, Worker>,
    calls: Vec<String>,
}

impl InMemoryDirectoryGateway {
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a department into the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the backing lock is poisoned.
    pub fn seed_department(&self, department: Department) -> ApiResult<()> {
        let mut state = self.write()?;
        state.departments.insert(department.id, department);
        Ok(())
    }

    /// Seeds a worker into the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the backing lock is poisoned.
    pub fn seed_worker(&self, worker: Worker) -> ApiResult<()> {
        let mut state = self.write()?;
        state.workers.insert(worker.id, worker);
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

    fn read(&self) -> ApiResult<std::sync::RwLockReadGuard<'_, DirectoryState>> {
        self.state
            .read()
            .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> ApiResult<std::sync::RwLockWriteGuard<'_, DirectoryState>> {
        self.state
            .write()
            .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))
    }
}

fn check_cancelled(cancel: &CancellationToken) -> ApiResult<()> {
    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }
    Ok(())
}

#[async_trait]
impl DirectoryGateway for InMemoryDirectoryGateway {
    async fn fetch_departments(&self, cancel: &CancellationToken) -> ApiResult<Vec<Department>> {
        check_cancelled(cancel)?;
        let state = self.read()?;
        let mut departments: Vec<Department> = state.departments.values().cloned().collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    async fn fetch_departments_public(
        &self,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<Department>> {
        check_cancelled(cancel)?;
        let state = self.read()?;
        let mut departments: Vec<Department> = state
            .departments
            .values()
            .filter(|d| d.active)
            .cloned()
            .collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    async fn create_department(&self, draft: &DepartmentDraft) -> ApiResult<Department> {
        let mut state = self.write()?;
        state.calls.push("POST /admin/departments".to_owned());
        let duplicate = state
            .departments
            .values()
            .any(|d| d.code == *draft.code());
        if duplicate {
            return Err(ApiError::Rejected {
                status: 409,
                message: format!("Department code '{}' already exists", draft.code()),
            });
        }
        let department = Department {
            id: DepartmentId::new(),
            name: draft.name().to_owned(),
            code: draft.code().clone(),
            description: draft.description().map(ToOwned::to_owned),
            active: true,
            official_count: 0,
            worker_count: 0,
        };
        state.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn update_department(
        &self,
        id: DepartmentId,
        update: &DepartmentUpdate,
    ) -> ApiResult<Department> {
        let mut state = self.write()?;
        state.calls.push(format!("PUT /admin/departments/{id}"));
        let department = state.departments.get_mut(&id).ok_or(ApiError::Rejected {
            status: 404,
            message: "Department not found".to_owned(),
        })?;
        if let Some(name) = &update.name {
            department.name.clone_from(name);
        }
        if let Some(description) = &update.description {
            department.description = Some(description.clone());
        }
        if let Some(active) = update.active {
            department.active = active;
        }
        Ok(department.clone())
    }

    async fn delete_department(&self, deletion: ConfirmedDeletion<DepartmentId>) -> ApiResult<()> {
        let mut state = self.write()?;
        let id = deletion.into_id();
        state.calls.push(format!("DELETE /admin/departments/{id}"));
        if state.departments.remove(&id).is_none() {
            return Err(ApiError::Rejected {
                status: 404,
                message: "Department not found".to_owned(),
            });
        }
        Ok(())
    }

    async fn fetch_officials(&self, cancel: &CancellationToken) -> ApiResult<Vec<Official>> {
        check_cancelled(cancel)?;
        let state = self.read()?;
        let mut officials: Vec<Official> = state.officials.values().cloned().collect();
        officials.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(officials)
    }

    async fn create_official(&self, draft: &OfficialDraft) -> ApiResult<Official> {
        let mut state = self.write()?;
        state.calls.push("POST /admin/officials".to_owned());
        let official = Official {
            id: OfficialId::new(),
            name: draft.name().to_owned(),
            email: draft.email().to_owned(),
            department: draft.department().clone(),
            designation: draft.designation().map(ToOwned::to_owned),
            verified: false,
        };
        state.officials.insert(official.id, official.clone());
        Ok(official)
    }

    async fn update_official(
        &self,
        id: OfficialId,
        update: &OfficialUpdate,
    ) -> ApiResult<Official> {
        let mut state = self.write()?;
        state.calls.push(format!("PUT /admin/officials/{id}"));
        let official = state.officials.get_mut(&id).ok_or(ApiError::Rejected {
            status: 404,
            message: "Official not found".to_owned(),
        })?;
        if let Some(name) = &update.name {
            official.name.clone_from(name);
        }
        if let Some(email) = &update.email {
            official.email.clone_from(email);
        }
        if let Some(department) = &update.department {
            official.department = department.clone();
        }
        if let Some(designation) = &update.designation {
            official.designation = Some(designation.clone());
        }
        Ok(official.clone())
    }

    async fn delete_official(&self, deletion: ConfirmedDeletion<OfficialId>) -> ApiResult<()> {
        let mut state = self.write()?;
        let id = deletion.into_id();
        state.calls.push(format!("DELETE /admin/officials/{id}"));
        if state.officials.remove(&id).is_none() {
            return Err(ApiError::Rejected {
                status: 404,
                message: "Official not found".to_owned(),
            });
        }
        Ok(())
    }

    async fn fetch_workers(&self, cancel: &CancellationToken) -> ApiResult<Vec<Worker>> {
        check_cancelled(cancel)?;
        let state = self.read()?;
        let mut workers: Vec<Worker> = state.workers.values().cloned().collect();
        workers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(workers)
    }

    async fn create_worker(&self, draft: &WorkerDraft) -> ApiResult<Worker> {
        let mut state = self.write()?;
        state.calls.push("POST /tasks/workers".to_owned());
        let worker = Worker {
            id: WorkerId::new(),
            name: draft.name().to_owned(),
            contact: draft.contact().to_owned(),
            email: draft.email().map(ToOwned::to_owned),
            department: draft.department().clone(),
            designation: draft.designation().map(ToOwned::to_owned),
            availability: Availability::Available,
        };
        state.workers.insert(worker.id, worker.clone());
        Ok(worker)
    }

    async fn delete_worker(&self, deletion: ConfirmedDeletion<WorkerId>) -> ApiResult<()> {
        let mut state = self.write()?;
        let id = deletion.into_id();
        state.calls.push(format!("DELETE /tasks/workers/{id}"));
        if state.workers.remove(&id).is_none() {
            return Err(ApiError::Rejected {
                status: 404,
                message: "Worker not found".to_owned(),
            });
        }
        Ok(())
    }
}

//! Service orchestration tests for directory administration.

use std::sync::Arc;

use crate::directory::adapters::memory::InMemoryDirectoryGateway;
use crate::directory::domain::{DepartmentCode, DepartmentDraft, WorkerDraft};
use crate::directory::ports::DirectoryGateway;
use crate::directory::services::{DirectoryError, DirectoryService};
use crate::gateway::{ApiError, CurrentUser, Role};
use rstest::{fixture, rstest};
use tokio_util::sync::CancellationToken;

type TestService = DirectoryService<InMemoryDirectoryGateway>;

#[fixture]
fn gateway() -> Arc<InMemoryDirectoryGateway> {
    Arc::new(InMemoryDirectoryGateway::new())
}

#[fixture]
fn admin() -> CurrentUser {
    CurrentUser::new("admin-1", "Site Admin", Role::Admin)
}

#[fixture]
fn official() -> CurrentUser {
    CurrentUser::new("official-1", "Jane Doe", Role::Official)
}

#[fixture]
fn citizen() -> CurrentUser {
    CurrentUser::new("citizen-1", "Alex Roe", Role::Citizen)
}

fn service_over(gateway: &Arc<InMemoryDirectoryGateway>) -> TestService {
    DirectoryService::new(Arc::clone(gateway))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_department_code_is_surfaced_and_list_unchanged(
    gateway: Arc<InMemoryDirectoryGateway>,
    admin: CurrentUser,
) {
    let service = service_over(&gateway);
    let first = DepartmentDraft::new("Roads", "ROADS").expect("valid draft");
    service
        .create_department(&admin, &first)
        .await
        .expect("first create should succeed");

    let duplicate = DepartmentDraft::new("Road Works", "roads").expect("valid draft");
    let error = service
        .create_department(&admin, &duplicate)
        .await
        .expect_err("duplicate code should be rejected");

    match error {
        DirectoryError::Gateway(ApiError::Rejected { status, message }) => {
            assert_eq!(status, 409);
            assert!(message.contains("ROADS"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    let departments = service
        .departments(&admin, &CancellationToken::new())
        .await
        .expect("list should succeed");
    assert_eq!(departments.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirmed_worker_delete_issues_exactly_one_call(
    gateway: Arc<InMemoryDirectoryGateway>,
    official: CurrentUser,
) {
    let service = service_over(&gateway);
    let department = DepartmentCode::new("ROADS").expect("valid code");
    let draft = WorkerDraft::new("Mike Johnson", "555-0101", department).expect("valid draft");
    let worker = service
        .create_worker(&official, &draft)
        .await
        .expect("create should succeed");

    let deletion = DirectoryService::<InMemoryDirectoryGateway>::request_deletion(worker.id);
    service
        .delete_worker(&official, deletion.confirm())
        .await
        .expect("delete should succeed");

    let calls = gateway.recorded_calls().expect("call log");
    let deletes: Vec<&String> = calls.iter().filter(|c| c.starts_with("DELETE")).collect();
    assert_eq!(deletes.len(), 1);

    let workers = service
        .workers(&official, &CancellationToken::new())
        .await
        .expect("list should succeed");
    assert!(workers.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_worker_delete_issues_zero_calls(
    gateway: Arc<InMemoryDirectoryGateway>,
    official: CurrentUser,
) {
    let service = service_over(&gateway);
    let department = DepartmentCode::new("ROADS").expect("valid code");
    let draft = WorkerDraft::new("Mike Johnson", "555-0101", department).expect("valid draft");
    let worker = service
        .create_worker(&official, &draft)
        .await
        .expect("create should succeed");

    let deletion = DirectoryService::<InMemoryDirectoryGateway>::request_deletion(worker.id);
    deletion.cancel();

    let calls = gateway.recorded_calls().expect("call log");
    assert!(calls.iter().all(|c| !c.starts_with("DELETE")));

    let workers = service
        .workers(&official, &CancellationToken::new())
        .await
        .expect("list should succeed");
    assert_eq!(workers.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn citizen_may_not_manage_departments(
    gateway: Arc<InMemoryDirectoryGateway>,
    citizen: CurrentUser,
) {
    let service = service_over(&gateway);
    let draft = DepartmentDraft::new("Roads", "ROADS").expect("valid draft");

    let error = service
        .create_department(&citizen, &draft)
        .await
        .expect_err("citizen must be refused");
    assert!(matches!(
        error,
        DirectoryError::UnauthorizedActor {
            actor: Role::Citizen,
            ..
        }
    ));

    let calls = gateway.recorded_calls().expect("call log");
    assert!(calls.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn public_department_read_skips_inactive_entries(
    gateway: Arc<InMemoryDirectoryGateway>,
    admin: CurrentUser,
) {
    let service = service_over(&gateway);
    let roads = DepartmentDraft::new("Roads", "ROADS").expect("valid draft");
    let water = DepartmentDraft::new("Water", "WATER").expect("valid draft");
    service
        .create_department(&admin, &roads)
        .await
        .expect("create roads");
    let created = service
        .create_department(&admin, &water)
        .await
        .expect("create water");

    let deactivate = crate::directory::domain::DepartmentUpdate {
        active: Some(false),
        ..Default::default()
    };
    service
        .update_department(&admin, created.id, &deactivate)
        .await
        .expect("deactivate water");

    let visible = service
        .public_departments(&CancellationToken::new())
        .await
        .expect("public list");
    assert_eq!(visible.len(), 1);
    assert!(visible.iter().all(|d| d.code.as_str() == "ROADS"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_fetch_discards_the_snapshot(gateway: Arc<InMemoryDirectoryGateway>) {
    let token = CancellationToken::new();
    token.cancel();

    let result = gateway.fetch_workers(&token).await;
    assert!(matches!(result, Err(ApiError::Cancelled)));
}

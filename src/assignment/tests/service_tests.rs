//! Service orchestration tests for work-order management.

use crate::assignment::adapters::memory::InMemoryAssignmentGateway;
use crate::assignment::domain::{AssignmentDomainError, WorkerRef};
use crate::assignment::services::{AssignmentError, AssignmentService};
use crate::directory::domain::WorkerId;
use crate::gateway::{ApiError, CurrentUser, Role};
use crate::issue::domain::{
    Category, CitizenId, Issue, IssueId, LifecycleStatus, NewIssue, Priority,
};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

type TestService = AssignmentService<InMemoryAssignmentGateway, DefaultClock>;

#[fixture]
fn gateway() -> Arc<InMemoryAssignmentGateway> {
    Arc::new(InMemoryAssignmentGateway::new())
}

#[fixture]
fn official() -> CurrentUser {
    CurrentUser::new("official-1", "Jane Doe", Role::Official)
}

#[fixture]
fn worker_user() -> CurrentUser {
    CurrentUser::new("worker-1", "Mike Johnson", Role::Worker)
}

#[fixture]
fn citizen() -> CurrentUser {
    CurrentUser::new("citizen-1", "Alex Roe", Role::Citizen)
}

fn service_over(gateway: &Arc<InMemoryAssignmentGateway>) -> TestService {
    AssignmentService::new(Arc::clone(gateway), Arc::new(DefaultClock))
}

fn pending_issue(title: &str) -> Issue {
    Issue::open(NewIssue {
        id: IssueId::new(),
        author: CitizenId::new(),
        title: title.to_owned(),
        description: "Large pothole near the crossing".to_owned(),
        category: Category::Roads,
        priority: Priority::High,
        location: "Main Street".to_owned(),
        department: None,
        created_at: DefaultClock.utc(),
    })
}

fn mike() -> WorkerRef {
    WorkerRef::new(WorkerId::new(), "Mike Johnson")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_worker_selection_issues_zero_calls(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
) {
    let service = service_over(&gateway);
    let issue = pending_issue("Road Repair Needed");

    let error = service
        .assign_worker(&official, &issue, None, "Fill potholes", None)
        .await
        .expect_err("empty picker must be refused");

    assert!(matches!(error, AssignmentError::MissingWorkerSelection));
    assert!(gateway.recorded_calls().expect("call log").is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test(flavor = "multi_thread")]
async fn blank_description_issues_zero_calls(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
    #[case] description: &str,
) {
    let service = service_over(&gateway);
    let issue = pending_issue("Road Repair Needed");

    let error = service
        .assign_worker(&official, &issue, Some(mike()), description, None)
        .await
        .expect_err("blank description must be refused");

    assert!(matches!(error, AssignmentError::Domain(_)));
    assert!(gateway.recorded_calls().expect("call log").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn citizen_may_not_assign(
    gateway: Arc<InMemoryAssignmentGateway>,
    citizen: CurrentUser,
) {
    let service = service_over(&gateway);
    let issue = pending_issue("Road Repair Needed");

    let error = service
        .assign_worker(&citizen, &issue, Some(mike()), "Fill potholes", None)
        .await
        .expect_err("citizen must be refused");

    assert!(matches!(
        error,
        AssignmentError::UnauthorizedActor {
            actor: Role::Citizen,
            ..
        }
    ));
    assert!(gateway.recorded_calls().expect("call log").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn worker_may_not_review(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
    worker_user: CurrentUser,
) {
    let service = service_over(&gateway);
    let issue = pending_issue("Road Repair Needed");
    let mut task = service
        .assign_worker(&official, &issue, Some(mike()), "Fill potholes", None)
        .await
        .expect("assignment succeeds");
    service
        .submit_completion(&worker_user, &mut task, "Filled 5 potholes", None)
        .await
        .expect("completion succeeds");

    let error = service
        .review(&worker_user, &mut task, "Looks fine")
        .await
        .expect_err("worker must be refused");
    assert!(matches!(error, AssignmentError::UnauthorizedActor { .. }));
    assert_eq!(task.status(), LifecycleStatus::Completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_replaces_the_previous_order(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
) {
    let service = service_over(&gateway);
    let issue = pending_issue("Road Repair Needed");
    gateway.seed_issue(issue.clone()).expect("seed");

    let first = service
        .assign_worker(&official, &issue, Some(mike()), "Fill potholes", None)
        .await
        .expect("first assignment succeeds");
    let replacement = WorkerRef::new(WorkerId::new(), "Dana Smith");
    let second = service
        .assign_worker(&official, &issue, Some(replacement), "Resurface the lane", None)
        .await
        .expect("second assignment succeeds");

    assert_ne!(first.id(), second.id());
    let live = gateway
        .task_for_issue(issue.id())
        .expect("lookup")
        .expect("one live order");
    assert_eq!(live.id(), second.id());
    assert_eq!(live.worker_name(), "Dana Smith");

    let tasks = service
        .tasks(&official, &CancellationToken::new())
        .await
        .expect("list succeeds");
    assert_eq!(tasks.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_through_the_service(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
    worker_user: CurrentUser,
) {
    let service = service_over(&gateway);
    let issue = pending_issue("Road Repair Needed");
    let mut task = service
        .assign_worker(
            &official,
            &issue,
            Some(mike()),
            "Fill potholes on Main Street",
            Some("Use cold mix if it rains".to_owned()),
        )
        .await
        .expect("assignment succeeds");
    assert_eq!(task.status(), LifecycleStatus::Assigned);

    service
        .start_work(&worker_user, &mut task)
        .await
        .expect("start succeeds");
    assert_eq!(task.status(), LifecycleStatus::InProgress);

    service
        .submit_completion(
            &worker_user,
            &mut task,
            "Filled 5 potholes",
            Some("https://media.example/proof.jpg".to_owned()),
        )
        .await
        .expect("completion succeeds");
    assert_eq!(task.status(), LifecycleStatus::Completed);
    assert!(task.completion_date().is_some());

    service
        .review(&official, &mut task, "Good work")
        .await
        .expect("review succeeds");
    assert_eq!(task.status(), LifecycleStatus::Reviewed);
    assert_eq!(task.official_remarks(), Some("Good work"));

    service
        .close(&official, &mut task)
        .await
        .expect("close succeeds");
    assert_eq!(task.status(), LifecycleStatus::Closed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_local_transition_issues_zero_calls(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
) {
    let service = service_over(&gateway);
    let issue = pending_issue("Road Repair Needed");
    let mut task = service
        .assign_worker(&official, &issue, Some(mike()), "Fill potholes", None)
        .await
        .expect("assignment succeeds");
    let calls_before = gateway.recorded_calls().expect("call log").len();

    let error = service
        .close(&official, &mut task)
        .await
        .expect_err("close from assigned must be refused locally");

    assert!(matches!(error, AssignmentError::Domain(_)));
    assert_eq!(task.status(), LifecycleStatus::Assigned);
    assert_eq!(gateway.recorded_calls().expect("call log").len(), calls_before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejecting_a_pending_issue_is_terminal(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
) {
    let service = service_over(&gateway);
    let mut issue = pending_issue("Duplicate Report");
    gateway.seed_issue(issue.clone()).expect("seed");

    service
        .reject_pending(&official, &mut issue, "Already reported last week")
        .await
        .expect("rejection succeeds");
    assert_eq!(issue.status(), LifecycleStatus::Rejected);

    let error = service
        .reject_pending(&official, &mut issue, "Already reported last week")
        .await
        .expect_err("a terminal issue admits nothing");
    assert!(matches!(error, AssignmentError::IssueNotPending { .. }));
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test(flavor = "multi_thread")]
async fn blank_rejection_reason_issues_zero_calls(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
    #[case] reason: &str,
) {
    let service = service_over(&gateway);
    let mut issue = pending_issue("Duplicate Report");

    let error = service
        .reject_pending(&official, &mut issue, reason)
        .await
        .expect_err("blank reason must be refused");

    assert!(matches!(
        error,
        AssignmentError::Domain(AssignmentDomainError::EmptyReason)
    ));
    assert_eq!(issue.status(), LifecycleStatus::Pending);
    assert!(gateway.recorded_calls().expect("call log").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejecting_an_assigned_issue_goes_through_its_order(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
) {
    let service = service_over(&gateway);
    let issue = pending_issue("Road Repair Needed");
    gateway.seed_issue(issue.clone()).expect("seed");
    let mut task = service
        .assign_worker(&official, &issue, Some(mike()), "Fill potholes", None)
        .await
        .expect("assignment succeeds");

    let mut assigned = gateway.issue(issue.id()).expect("lookup").expect("seeded");
    let error = service
        .reject_pending(&official, &mut assigned, "Duplicate of an existing report")
        .await
        .expect_err("an ordered issue is not rejected directly");
    assert!(matches!(
        error,
        AssignmentError::IssueNotPending {
            status: LifecycleStatus::Assigned,
        }
    ));
    let live = gateway
        .task_for_issue(issue.id())
        .expect("lookup")
        .expect("order survives the refused call");
    assert_eq!(live.status(), LifecycleStatus::Assigned);

    service
        .reject_order(&official, &mut task, "Duplicate of an existing report")
        .await
        .expect("order rejection succeeds");
    assert_eq!(task.status(), LifecycleStatus::Rejected);
    assert_eq!(task.official_remarks(), Some("Duplicate of an existing report"));
    let stored = gateway.issue(issue.id()).expect("lookup").expect("seeded");
    assert_eq!(stored.status(), LifecycleStatus::Rejected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn started_work_cannot_be_rejected(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
    worker_user: CurrentUser,
) {
    let service = service_over(&gateway);
    let issue = pending_issue("Road Repair Needed");
    let mut task = service
        .assign_worker(&official, &issue, Some(mike()), "Fill potholes", None)
        .await
        .expect("assignment succeeds");
    service
        .start_work(&worker_user, &mut task)
        .await
        .expect("start succeeds");
    let calls_before = gateway.recorded_calls().expect("call log").len();

    let error = service
        .reject_order(&official, &mut task, "Duplicate of an existing report")
        .await
        .expect_err("work under way must not be rejected");

    assert!(matches!(error, AssignmentError::Domain(_)));
    assert_eq!(task.status(), LifecycleStatus::InProgress);
    assert_eq!(gateway.recorded_calls().expect("call log").len(), calls_before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigning_a_closed_issue_is_refused(
    gateway: Arc<InMemoryAssignmentGateway>,
    official: CurrentUser,
) {
    let service = service_over(&gateway);
    let mut issue = pending_issue("Old Report");
    for status in [
        LifecycleStatus::Assigned,
        LifecycleStatus::InProgress,
        LifecycleStatus::Completed,
        LifecycleStatus::Reviewed,
        LifecycleStatus::Closed,
    ] {
        issue.apply_status(status).expect("walk to closed");
    }

    let error = service
        .assign_worker(&official, &issue, Some(mike()), "Fill potholes", None)
        .await
        .expect_err("closed issues are not assignable");
    assert!(matches!(error, AssignmentError::Domain(_)));
    assert!(gateway.recorded_calls().expect("call log").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_fetch_discards_the_snapshot(gateway: Arc<InMemoryAssignmentGateway>) {
    use crate::assignment::ports::AssignmentGateway;

    let token = CancellationToken::new();
    token.cancel();

    let result = gateway.fetch_tasks(&token).await;
    assert!(matches!(result, Err(ApiError::Cancelled)));
}

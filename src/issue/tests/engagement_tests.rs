//! Engagement behaviour tests: upvote toggling, comments, and ranking.

use crate::issue::adapters::memory::InMemoryIssueGateway;
use crate::issue::domain::{
    Category, CitizenId, Issue, IssueId, NewIssue, Priority, rank_by_engagement,
};
use crate::issue::domain::EngagementScore;
use crate::issue::services::{EngagementError, EngagementService};
use chrono::{Duration, Utc};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};
use std::sync::Arc;

fn sample_issue(title: &str) -> Issue {
    Issue::open(NewIssue {
        id: IssueId::new(),
        author: CitizenId::new(),
        title: title.to_owned(),
        description: "Large pothole near the crossing".to_owned(),
        category: Category::Roads,
        priority: Priority::Medium,
        location: "Main Street".to_owned(),
        department: None,
        created_at: DefaultClock.utc(),
    })
}

#[fixture]
fn citizen() -> CitizenId {
    CitizenId::new()
}

#[rstest]
fn double_toggle_restores_membership_and_count(citizen: CitizenId) {
    let mut issue = sample_issue("Road Repair Needed");
    let before = issue.upvote_count();

    assert!(issue.toggle_upvote(citizen));
    assert!(issue.upvoted_by(citizen));
    assert_eq!(issue.upvote_count(), before + 1);

    assert!(!issue.toggle_upvote(citizen));
    assert!(!issue.upvoted_by(citizen));
    assert_eq!(issue.upvote_count(), before);
}

#[rstest]
fn toggling_for_two_citizens_keeps_counts_independent(citizen: CitizenId) {
    let other = CitizenId::new();
    let mut issue = sample_issue("Road Repair Needed");

    issue.toggle_upvote(citizen);
    issue.toggle_upvote(other);
    assert_eq!(issue.upvote_count(), 2);

    issue.toggle_upvote(citizen);
    assert_eq!(issue.upvote_count(), 1);
    assert!(issue.upvoted_by(other));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn service_toggle_refreshes_the_local_copy(citizen: CitizenId) {
    let gateway = Arc::new(InMemoryIssueGateway::new(citizen));
    let mut issue = sample_issue("Road Repair Needed");
    gateway.seed_issue(issue.clone()).expect("seed");
    let service = EngagementService::new(Arc::clone(&gateway));

    let upvoted = service
        .toggle_upvote(&mut issue, citizen)
        .await
        .expect("toggle should succeed");
    assert!(upvoted);
    assert!(issue.upvoted_by(citizen));

    let upvoted = service
        .toggle_upvote(&mut issue, citizen)
        .await
        .expect("toggle should succeed");
    assert!(!upvoted);
    assert!(!issue.upvoted_by(citizen));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_comment_makes_no_call(citizen: CitizenId) {
    let gateway = Arc::new(InMemoryIssueGateway::new(citizen));
    let mut issue = sample_issue("Road Repair Needed");
    gateway.seed_issue(issue.clone()).expect("seed");
    let service = EngagementService::new(Arc::clone(&gateway));

    let error = service
        .add_comment(&mut issue, "   ")
        .await
        .expect_err("blank comment must be refused");
    assert!(matches!(error, EngagementError::Domain(_)));
    assert!(gateway.recorded_calls().expect("call log").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comment_appends_through_the_gateway(citizen: CitizenId) {
    let gateway = Arc::new(InMemoryIssueGateway::new(citizen));
    let mut issue = sample_issue("Road Repair Needed");
    gateway.seed_issue(issue.clone()).expect("seed");
    let service = EngagementService::new(Arc::clone(&gateway));

    service
        .add_comment(&mut issue, "Please fix before the rains")
        .await
        .expect("comment should succeed");
    assert_eq!(issue.comments().len(), 1);
    let comment = issue.comments().first().expect("one comment");
    assert_eq!(comment.text, "Please fix before the rains");
}

#[rstest]
fn ranking_orders_by_score_then_recency() {
    let now = DefaultClock.utc();
    let mut quiet = sample_issue("Quiet");
    let mut loud = sample_issue("Loud");
    let mut older_loud = sample_issue("Older Loud");

    set_engagement(&mut quiet, 1.0, now);
    set_engagement(&mut loud, 9.5, now);
    set_engagement(&mut older_loud, 9.5, now - Duration::hours(2));

    let mut issues = vec![quiet, older_loud, loud];
    rank_by_engagement(&mut issues);

    let titles: Vec<&str> = issues.iter().map(Issue::title).collect();
    assert_eq!(titles, vec!["Loud", "Older Loud", "Quiet"]);
}

fn set_engagement(issue: &mut Issue, score: f64, created_at: chrono::DateTime<Utc>) {
    let mut value = serde_json::to_value(&*issue).expect("issue serializes");
    value["engagement"] = serde_json::json!(score);
    value["created_at"] = serde_json::json!(created_at);
    *issue = serde_json::from_value(value).expect("issue deserializes");
    assert_eq!(issue.engagement(), EngagementScore::new(score));
}

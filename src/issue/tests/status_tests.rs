//! Lifecycle transition table tests.

use crate::issue::domain::LifecycleStatus;
use rstest::rstest;

#[rstest]
#[case(LifecycleStatus::Pending, LifecycleStatus::Assigned)]
#[case(LifecycleStatus::Pending, LifecycleStatus::Rejected)]
#[case(LifecycleStatus::Assigned, LifecycleStatus::InProgress)]
#[case(LifecycleStatus::Assigned, LifecycleStatus::Completed)]
#[case(LifecycleStatus::Assigned, LifecycleStatus::Rejected)]
#[case(LifecycleStatus::InProgress, LifecycleStatus::Completed)]
#[case(LifecycleStatus::Completed, LifecycleStatus::Reviewed)]
#[case(LifecycleStatus::Reviewed, LifecycleStatus::Closed)]
fn permitted_transitions(#[case] from: LifecycleStatus, #[case] to: LifecycleStatus) {
    assert!(from.can_transition_to(to), "{from} -> {to} must be allowed");
}

#[rstest]
#[case(LifecycleStatus::Pending, LifecycleStatus::InProgress)]
#[case(LifecycleStatus::Pending, LifecycleStatus::Completed)]
#[case(LifecycleStatus::Pending, LifecycleStatus::Reviewed)]
#[case(LifecycleStatus::Pending, LifecycleStatus::Closed)]
#[case(LifecycleStatus::Assigned, LifecycleStatus::Pending)]
#[case(LifecycleStatus::Assigned, LifecycleStatus::Reviewed)]
#[case(LifecycleStatus::Assigned, LifecycleStatus::Closed)]
#[case(LifecycleStatus::InProgress, LifecycleStatus::Assigned)]
#[case(LifecycleStatus::InProgress, LifecycleStatus::Rejected)]
#[case(LifecycleStatus::InProgress, LifecycleStatus::Reviewed)]
#[case(LifecycleStatus::InProgress, LifecycleStatus::Closed)]
#[case(LifecycleStatus::Completed, LifecycleStatus::Closed)]
#[case(LifecycleStatus::Completed, LifecycleStatus::Rejected)]
#[case(LifecycleStatus::Completed, LifecycleStatus::InProgress)]
#[case(LifecycleStatus::Reviewed, LifecycleStatus::Completed)]
#[case(LifecycleStatus::Reviewed, LifecycleStatus::Rejected)]
fn refused_transitions(#[case] from: LifecycleStatus, #[case] to: LifecycleStatus) {
    assert!(!from.can_transition_to(to), "{from} -> {to} must be refused");
}

#[rstest]
#[case(LifecycleStatus::Closed)]
#[case(LifecycleStatus::Rejected)]
fn terminal_states_admit_nothing(#[case] from: LifecycleStatus) {
    assert!(from.is_terminal());
    for to in [
        LifecycleStatus::Pending,
        LifecycleStatus::Assigned,
        LifecycleStatus::InProgress,
        LifecycleStatus::Completed,
        LifecycleStatus::Reviewed,
        LifecycleStatus::Closed,
        LifecycleStatus::Rejected,
    ] {
        assert!(!from.can_transition_to(to), "{from} -> {to} must be refused");
    }
}

#[rstest]
#[case(LifecycleStatus::Pending)]
#[case(LifecycleStatus::Assigned)]
#[case(LifecycleStatus::InProgress)]
#[case(LifecycleStatus::Completed)]
#[case(LifecycleStatus::Reviewed)]
fn live_states_are_not_terminal(#[case] status: LifecycleStatus) {
    assert!(!status.is_terminal());
}

#[rstest]
#[case("pending", LifecycleStatus::Pending)]
#[case("  In_Progress  ", LifecycleStatus::InProgress)]
#[case("REVIEWED", LifecycleStatus::Reviewed)]
fn parses_status_labels(#[case] input: &str, #[case] expected: LifecycleStatus) {
    let parsed = LifecycleStatus::try_from(input).expect("label should parse");
    assert_eq!(parsed, expected);
}

#[rstest]
#[case("")]
#[case("inprogress")]
#[case("done")]
fn rejects_unknown_status_labels(#[case] input: &str) {
    assert!(LifecycleStatus::try_from(input).is_err());
}

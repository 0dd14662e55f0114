//! Local validation gate tests for issue drafts.

use crate::issue::domain::{
    Category, IssueDomainError, IssueDraft, MIN_DESCRIPTION_CHARS, MIN_LOCATION_CHARS, Priority,
};
use rstest::rstest;

fn draft(title: &str, description: &str, location: &str) -> IssueDraft {
    IssueDraft::new(title, description, Category::Roads, location)
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_title_is_refused(#[case] title: &str) {
    let error = draft(title, "Large pothole", "Main Street")
        .validate()
        .expect_err("blank title must fail");
    assert!(matches!(error, IssueDomainError::EmptyTitle));
}

#[rstest]
fn description_one_under_the_minimum_is_refused() {
    let error = draft("Road Repair Needed", "Pits", "Main Street")
        .validate()
        .expect_err("four characters must fail");
    assert!(matches!(
        error,
        IssueDomainError::DescriptionTooShort {
            min: MIN_DESCRIPTION_CHARS,
            actual: 4,
        }
    ));
}

#[rstest]
fn description_at_the_minimum_passes() {
    draft("Road Repair Needed", "Holes", "Main Street")
        .validate()
        .expect("five characters must pass");
}

#[rstest]
fn location_one_under_the_minimum_is_refused() {
    let error = draft("Road Repair Needed", "Large pothole", "NW")
        .validate()
        .expect_err("two characters must fail");
    assert!(matches!(
        error,
        IssueDomainError::LocationTooShort {
            min: MIN_LOCATION_CHARS,
            actual: 2,
        }
    ));
}

#[rstest]
fn location_at_the_minimum_passes() {
    draft("Road Repair Needed", "Large pothole", "5th")
        .validate()
        .expect("three characters must pass");
}

#[rstest]
fn surrounding_whitespace_does_not_count_toward_length() {
    let error = draft("Road Repair Needed", "  Pits  ", "Main Street")
        .validate()
        .expect_err("padding must not rescue a short description");
    assert!(matches!(
        error,
        IssueDomainError::DescriptionTooShort { actual: 4, .. }
    ));
}

#[rstest]
fn lengths_are_counted_in_characters_not_bytes() {
    draft("Road Repair Needed", "Grubé", "Main Street")
        .validate()
        .expect("five characters must pass regardless of encoding width");
}

#[rstest]
fn priority_defaults_to_medium() {
    let draft = draft("Road Repair Needed", "Large pothole", "Main Street");
    assert_eq!(draft.priority, Priority::Medium);
}

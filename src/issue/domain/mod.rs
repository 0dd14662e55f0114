//! Domain model for citizen-submitted issues.
//!
//! The issue aggregate, its lifecycle status machine, draft validation,
//! media attachment policy, and engagement ordering live here, free of any
//! infrastructure concern.

mod draft;
mod error;
mod ids;
mod issue;
mod kinds;
mod media;
mod status;

pub use draft::{IssueDraft, MIN_DESCRIPTION_CHARS, MIN_LOCATION_CHARS};
pub use error::{IssueDomainError, ParseLifecycleStatusError};
pub use ids::{CitizenId, IssueId};
pub use issue::{Comment, EngagementScore, Issue, NewIssue, rank_by_engagement};
pub use kinds::{Category, ParseCategoryError, ParsePriorityError, Priority};
pub use media::{MediaAttachment, MediaRef, SubmissionWarning};
pub use status::LifecycleStatus;

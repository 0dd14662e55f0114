//! Application services for issue reporting and engagement.

mod engagement;
mod submission;

pub use engagement::{EngagementError, EngagementResult, EngagementService};
pub use submission::{
    InFlightGuard, IssueSubmissionService, SubmissionError, SubmissionOutcome, SubmissionResult,
};

//! Issue aggregate root, comments, and engagement ordering.

use super::error::IssueDomainError;
use super::ids::{CitizenId, IssueId};
use super::kinds::{Category, Priority};
use super::status::LifecycleStatus;
use crate::directory::domain::DepartmentCode;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Server-derived engagement ranking value.
///
/// The weighting of upvotes, comments, and recency is computed upstream;
/// the client treats the score as opaque and only orders by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngagementScore(f64);

impl EngagementScore {
    /// Wraps a server-provided score.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw score.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Total ordering over scores (NaN sorts lowest).
    #[must_use]
    pub fn total_cmp(self, other: Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A citizen comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author.
    pub author: CitizenId,
    /// Comment text, non-empty after trimming.
    pub text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a validated comment.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyCommentText`] when the text is
    /// blank.
    pub fn new(
        author: CitizenId,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, IssueDomainError> {
        let raw = text.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(IssueDomainError::EmptyCommentText);
        }
        Ok(Self {
            author,
            text: normalized.to_owned(),
            created_at: clock.utc(),
        })
    }
}

/// Parameter object for opening a new issue from accepted submission data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Assigned issue identifier.
    pub id: IssueId,
    /// Submitting citizen.
    pub author: CitizenId,
    /// Issue title.
    pub title: String,
    /// Problem description.
    pub description: String,
    /// Issue category.
    pub category: Category,
    /// Submission priority.
    pub priority: Priority,
    /// Free-text location.
    pub location: String,
    /// Target department, when chosen.
    pub department: Option<DepartmentCode>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Issue aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    id: IssueId,
    title: String,
    description: String,
    category: Category,
    priority: Priority,
    location: String,
    department: Option<DepartmentCode>,
    status: LifecycleStatus,
    created_at: DateTime<Utc>,
    author: CitizenId,
    upvotes: BTreeSet<CitizenId>,
    comments: Vec<Comment>,
    engagement: EngagementScore,
}

impl Issue {
    /// Opens a new issue in `Pending` with no engagement yet.
    #[must_use]
    pub fn open(new: NewIssue) -> Self {
        Self {
            id: new.id,
            title: new.title,
            description: new.description,
            category: new.category,
            priority: new.priority,
            location: new.location,
            department: new.department,
            status: LifecycleStatus::Pending,
            created_at: new.created_at,
            author: new.author,
            upvotes: BTreeSet::new(),
            comments: Vec::new(),
            engagement: EngagementScore::default(),
        }
    }

    /// Returns the issue identifier.
    #[must_use]
    pub const fn id(&self) -> IssueId {
        self.id
    }

    /// Returns the issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the problem description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the issue category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the submission priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the free-text location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the target department, when chosen.
    #[must_use]
    pub const fn department(&self) -> Option<&DepartmentCode> {
        self.department.as_ref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> LifecycleStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the submitting citizen.
    #[must_use]
    pub const fn author(&self) -> CitizenId {
        self.author
    }

    /// Returns the number of distinct upvoting citizens.
    #[must_use]
    pub fn upvote_count(&self) -> usize {
        self.upvotes.len()
    }

    /// Returns `true` when the citizen currently upvotes this issue.
    #[must_use]
    pub fn upvoted_by(&self, citizen: CitizenId) -> bool {
        self.upvotes.contains(&citizen)
    }

    /// Returns the ordered comments.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the server-derived engagement score.
    #[must_use]
    pub const fn engagement(&self) -> EngagementScore {
        self.engagement
    }

    /// Toggles the citizen's upvote and reports the new membership.
    ///
    /// Invoking twice in sequence restores the original membership, so the
    /// action is safe to double-invoke.
    pub fn toggle_upvote(&mut self, citizen: CitizenId) -> bool {
        if self.upvotes.remove(&citizen) {
            false
        } else {
            self.upvotes.insert(citizen);
            true
        }
    }

    /// Appends a validated comment.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyCommentText`] for blank text.
    pub fn add_comment(
        &mut self,
        author: CitizenId,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), IssueDomainError> {
        let comment = Comment::new(author, text, clock)?;
        self.comments.push(comment);
        Ok(())
    }

    /// Applies a status change guarded by the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidStatusTransition`] when the
    /// change is not permitted; the issue is left unchanged.
    pub fn apply_status(&mut self, to: LifecycleStatus) -> Result<(), IssueDomainError> {
        if !self.status.can_transition_to(to) {
            return Err(IssueDomainError::InvalidStatusTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

/// Orders issues by engagement score, newest first among equals.
pub fn rank_by_engagement(issues: &mut [Issue]) {
    issues.sort_by(|a, b| {
        b.engagement
            .total_cmp(a.engagement)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

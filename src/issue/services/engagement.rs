//! Service layer for the engagement actions on issues.

use crate::gateway::ApiError;
use crate::issue::domain::{CitizenId, Issue, IssueDomainError};
use crate::issue::ports::IssueGateway;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Service-level errors for engagement actions.
#[derive(Debug, Error)]
pub enum EngagementError {
    /// Local validation failed; no call was made.
    #[error(transparent)]
    Domain(#[from] IssueDomainError),

    /// The remote API rejected the call or transport failed.
    #[error(transparent)]
    Gateway(#[from] ApiError),
}

/// Result type for engagement operations.
pub type EngagementResult<T> = Result<T, EngagementError>;

/// Engagement orchestration service.
#[derive(Clone)]
pub struct EngagementService<G>
where
    G: IssueGateway,
{
    gateway: Arc<G>,
}

impl<G> EngagementService<G>
where
    G: IssueGateway,
{
    /// Creates an engagement service over the given gateway.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Fetches the current issue snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`EngagementError::Gateway`] on rejection, transport
    /// failure, or cancellation.
    pub async fn issues(&self, cancel: &CancellationToken) -> EngagementResult<Vec<Issue>> {
        Ok(self.gateway.fetch_issues(cancel).await?)
    }

    /// Toggles the citizen's upvote and refreshes the local copy from the
    /// server's response.
    ///
    /// The action is idempotent as a pair: toggling twice restores the
    /// original membership and count. Returns `true` when the citizen
    /// upvotes the issue after this call.
    ///
    /// # Errors
    ///
    /// Returns [`EngagementError::Gateway`] on rejection or transport
    /// failure; the local issue is left untouched.
    pub async fn toggle_upvote(
        &self,
        issue: &mut Issue,
        citizen: CitizenId,
    ) -> EngagementResult<bool> {
        let updated = self.gateway.toggle_upvote(issue.id()).await?;
        let now_upvoted = updated.upvoted_by(citizen);
        *issue = updated;
        Ok(now_upvoted)
    }

    /// Adds a comment and refreshes the local copy from the server's
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`EngagementError::Domain`] for blank text with no call
    /// made, or [`EngagementError::Gateway`] on rejection or transport
    /// failure.
    pub async fn add_comment(&self, issue: &mut Issue, text: &str) -> EngagementResult<()> {
        if text.trim().is_empty() {
            return Err(IssueDomainError::EmptyCommentText.into());
        }
        let updated = self.gateway.add_comment(issue.id(), text).await?;
        *issue = updated;
        Ok(())
    }
}

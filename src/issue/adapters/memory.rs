//! In-memory issue gateway and media uploader for tests.
//!
//! The gateway mirrors the backend's observable behaviour: submissions
//! are deduplicated by idempotency key, upvote toggling flips membership
//! for the configured citizen, and every mutating call is recorded so
//! tests can assert call counts.

use crate::gateway::{ApiError, ApiResult, IdempotencyKey};
use crate::issue::domain::{CitizenId, Issue, IssueId, MediaAttachment, NewIssue};
use crate::issue::ports::{IssueGateway, IssueSubmission, MediaUploader};
use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio_util::sync::CancellationToken;

/// Thread-safe in-memory issue gateway.
#[derive(Debug, Clone)]
pub struct InMemoryIssueGateway {
    citizen: CitizenId,
    state: Arc<RwLock<IssueState>>,
}

#[derive(Debug, Default)]
struct IssueState {
    issues: HashMap<IssueId, Issue>,
    submitted: HashMap<String, IssueId>,
    calls: Vec<String>,
}

impl InMemoryIssueGateway {
    /// Creates a gateway acting as the given citizen.
    #[must_use]
    pub fn new(citizen: CitizenId) -> Self {
        Self {
            citizen,
            state: Arc::new(RwLock::new(IssueState::default())),
        }
    }

    /// Seeds an issue into the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the backing lock is poisoned.
    pub fn seed_issue(&self, issue: Issue) -> ApiResult<()> {
        let mut state = self.write()?;
        state.issues.insert(issue.id(), issue);
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

    fn read(&self) -> ApiResult<std::sync::RwLockReadGuard<'_, IssueState>> {
        self.state
            .read()
            .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> ApiResult<std::sync::RwLockWriteGuard<'_, IssueState>> {
        self.state
            .write()
            .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl IssueGateway for InMemoryIssueGateway {
    async fn fetch_issues(&self, cancel: &CancellationToken) -> ApiResult<Vec<Issue>> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let state = self.read()?;
        let mut issues: Vec<Issue> = state.issues.values().cloned().collect();
        issues.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(issues)
    }

    async fn submit_issue(
        &self,
        submission: &IssueSubmission,
        key: &IdempotencyKey,
    ) -> ApiResult<Issue> {
        let mut state = self.write()?;
        state.calls.push("POST /posts".to_owned());

        if let Some(existing) = state.submitted.get(key.as_str())
            && let Some(issue) = state.issues.get(existing)
        {
            return Ok(issue.clone());
        }

        let issue = Issue::open(NewIssue {
            id: IssueId::new(),
            author: self.citizen,
            title: submission.title.clone(),
            description: submission.description.clone(),
            category: submission.category,
            priority: submission.priority,
            location: submission.location.clone(),
            department: submission.department.clone(),
            created_at: DefaultClock.utc(),
        });
        state.submitted.insert(key.as_str().to_owned(), issue.id());
        state.issues.insert(issue.id(), issue.clone());
        Ok(issue)
    }

    async fn toggle_upvote(&self, issue: IssueId) -> ApiResult<Issue> {
        let mut state = self.write()?;
        state.calls.push(format!("POST /posts/{issue}/upvote"));
        let citizen = self.citizen;
        let stored = state.issues.get_mut(&issue).ok_or(ApiError::Rejected {
            status: 404,
            message: "Post not found".to_owned(),
        })?;
        stored.toggle_upvote(citizen);
        Ok(stored.clone())
    }

    async fn add_comment(&self, issue: IssueId, text: &str) -> ApiResult<Issue> {
        let mut state = self.write()?;
        state.calls.push(format!("POST /posts/{issue}/comments"));
        let citizen = self.citizen;
        let stored = state.issues.get_mut(&issue).ok_or(ApiError::Rejected {
            status: 404,
            message: "Post not found".to_owned(),
        })?;
        stored
            .add_comment(citizen, text, &DefaultClock)
            .map_err(|err| ApiError::Rejected {
                status: 422,
                message: err.to_string(),
            })?;
        Ok(stored.clone())
    }
}

/// Behaviour of the in-memory uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadMode {
    Succeed,
    Fail,
}

/// In-memory media uploader with switchable failure behaviour.
#[derive(Debug)]
pub struct InMemoryMediaUploader {
    mode: RwLock<UploadMode>,
    uploads: RwLock<usize>,
}

impl InMemoryMediaUploader {
    /// Creates an uploader that succeeds.
    #[must_use]
    pub const fn succeeding() -> Self {
        Self {
            mode: RwLock::new(UploadMode::Succeed),
            uploads: RwLock::new(0),
        }
    }

    /// Creates an uploader that fails every call.
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            mode: RwLock::new(UploadMode::Fail),
            uploads: RwLock::new(0),
        }
    }

    /// Returns the number of upload calls made.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the backing lock is poisoned.
    pub fn upload_calls(&self) -> ApiResult<usize> {
        self.uploads
            .read()
            .map(|count| *count)
            .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl MediaUploader for InMemoryMediaUploader {
    async fn upload(&self, attachments: &[MediaAttachment]) -> ApiResult<Vec<String>> {
        {
            let mut count = self
                .uploads
                .write()
                .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))?;
            *count = count.saturating_add(1);
        }
        let mode = self
            .mode
            .read()
            .map(|mode| *mode)
            .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))?;
        match mode {
            UploadMode::Succeed => Ok(attachments
                .iter()
                .map(|a| format!("https://media.example/{}", a.file_name()))
                .collect()),
            UploadMode::Fail => Err(ApiError::Rejected {
                status: 503,
                message: "upload service unavailable".to_owned(),
            }),
        }
    }
}

//! Service layer for issue submission.
//!
//! Submission validates locally, resolves media through the upload
//! collaborator with best-effort degradation, and sends the payload with a
//! content-derived idempotency key. Every failure hands the draft back to
//! the caller so no user input is lost, and an in-flight guard refuses a
//! second submission while one is pending.

use crate::gateway::idempotency::IdempotencyKeyError;
use crate::gateway::{ApiError, IdempotencyKey};
use crate::issue::domain::{Issue, IssueDomainError, IssueDraft, MediaRef, SubmissionWarning};
use crate::issue::ports::{IssueGateway, IssueSubmission, MediaUploader};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Guard refusing concurrent submissions of the same form.
#[derive(Debug, Default)]
pub struct InFlightGuard {
    busy: AtomicBool,
}

impl InFlightGuard {
    /// Creates an idle guard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Claims the guard; returns `None` while another claim is live.
    #[must_use]
    pub fn begin(self: &Arc<Self>) -> Option<InFlightPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightPermit {
                guard: Arc::clone(self),
            })
    }

    /// Returns `true` while a claim is live.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Live claim on an [`InFlightGuard`]; released on drop.
#[derive(Debug)]
pub struct InFlightPermit {
    guard: Arc<InFlightGuard>,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}

/// Errors returned by the submission service; every variant preserves the
/// draft so the originating form can be repopulated.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The draft failed the local gate; no call was made.
    #[error("submission rejected locally: {source}")]
    Invalid {
        /// The unmodified draft.
        draft: IssueDraft,
        /// The failed validation rule.
        source: IssueDomainError,
    },

    /// Another submission of this form is already in flight.
    #[error("a submission is already in flight")]
    AlreadyInFlight {
        /// The unmodified draft.
        draft: IssueDraft,
    },

    /// The payload could not be prepared for sending.
    #[error("failed to prepare submission")]
    Preparation {
        /// The unmodified draft.
        draft: IssueDraft,
        /// The underlying serialization failure.
        source: IdempotencyKeyError,
    },

    /// The remote API rejected the submission or transport failed.
    #[error("submission failed: {source}")]
    Rejected {
        /// The unmodified draft.
        draft: IssueDraft,
        /// The gateway failure, message verbatim for rejections.
        source: ApiError,
    },
}

impl SubmissionError {
    /// Recovers the preserved draft.
    #[must_use]
    pub fn into_draft(self) -> IssueDraft {
        match self {
            Self::Invalid { draft, .. }
            | Self::AlreadyInFlight { draft }
            | Self::Preparation { draft, .. }
            | Self::Rejected { draft, .. } => draft,
        }
    }
}

/// Result type for submission operations.
pub type SubmissionResult = Result<SubmissionOutcome, SubmissionError>;

/// A successful submission plus any degradation warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    /// The created issue, as returned by the backend.
    pub issue: Issue,
    /// Non-fatal conditions recorded along the way.
    pub warnings: Vec<SubmissionWarning>,
}

/// Issue submission orchestration service.
#[derive(Clone)]
pub struct IssueSubmissionService<G, U>
where
    G: IssueGateway,
    U: MediaUploader,
{
    gateway: Arc<G>,
    uploader: Arc<U>,
    guard: Arc<InFlightGuard>,
}

impl<G, U> IssueSubmissionService<G, U>
where
    G: IssueGateway,
    U: MediaUploader,
{
    /// Creates a submission service for one form.
    #[must_use]
    pub fn new(gateway: Arc<G>, uploader: Arc<U>) -> Self {
        Self {
            gateway,
            uploader,
            guard: Arc::new(InFlightGuard::new()),
        }
    }

    /// Returns the in-flight guard, for wiring into form state.
    #[must_use]
    pub fn guard(&self) -> Arc<InFlightGuard> {
        Arc::clone(&self.guard)
    }

    /// Submits a draft.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] on local rejection, concurrent
    /// submission, or gateway failure; the draft rides along in every
    /// case.
    pub async fn submit(&self, draft: IssueDraft) -> SubmissionResult {
        if let Err(source) = draft.validate() {
            return Err(SubmissionError::Invalid { draft, source });
        }
        let Some(_permit) = self.guard.begin() else {
            return Err(SubmissionError::AlreadyInFlight { draft });
        };

        let (media, warnings) = self.resolve_media(&draft).await;
        let submission = IssueSubmission {
            title: draft.title.trim().to_owned(),
            description: draft.description.trim().to_owned(),
            category: draft.category,
            priority: draft.priority,
            location: draft.location.trim().to_owned(),
            department: draft.department.clone(),
            media,
        };
        let key = match IdempotencyKey::for_payload(&submission) {
            Ok(key) => key,
            Err(source) => return Err(SubmissionError::Preparation { draft, source }),
        };

        match self.gateway.submit_issue(&submission, &key).await {
            Ok(issue) => Ok(SubmissionOutcome { issue, warnings }),
            Err(source) => Err(SubmissionError::Rejected { draft, source }),
        }
    }

    /// Resolves attachments to media references, degrading on upload
    /// failure instead of failing the submission.
    async fn resolve_media(&self, draft: &IssueDraft) -> (Vec<MediaRef>, Vec<SubmissionWarning>) {
        if draft.media.is_empty() {
            return (Vec::new(), Vec::new());
        }
        match self.uploader.upload(&draft.media).await {
            Ok(urls) => (
                urls.into_iter().map(|url| MediaRef::Remote { url }).collect(),
                Vec::new(),
            ),
            Err(err) => {
                tracing::warn!(error = %err, "media upload failed, degrading to inline media");
                let mut media = Vec::new();
                let mut warnings = vec![SubmissionWarning::UploadFailed {
                    detail: err.to_string(),
                }];
                for attachment in &draft.media {
                    match attachment.inline_fallback() {
                        Some(inline) => media.push(inline),
                        None => warnings.push(SubmissionWarning::VideoDropped {
                            file_name: attachment.file_name().to_owned(),
                        }),
                    }
                }
                (media, warnings)
            }
        }
    }
}

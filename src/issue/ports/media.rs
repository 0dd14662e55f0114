//! Media upload collaborator port.

use crate::gateway::ApiResult;
use crate::issue::domain::MediaAttachment;
use async_trait::async_trait;

/// Uploads media files ahead of issue submission.
///
/// A failed upload does not fail the submission; the caller applies the
/// inline-image degradation policy instead.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Uploads the attachments and returns their resulting URLs, in order.
    async fn upload(&self, attachments: &[MediaAttachment]) -> ApiResult<Vec<String>>;
}

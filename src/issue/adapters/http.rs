//! HTTP adapters for the issue gateway and media uploader.

use crate::gateway::{ApiClient, ApiError, ApiResult, IdempotencyKey};
use crate::issue::domain::{Issue, IssueId, MediaAttachment};
use crate::issue::ports::{IssueGateway, IssueSubmission, MediaUploader};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Issue gateway backed by the remote REST API.
#[derive(Debug, Clone)]
pub struct HttpIssueGateway {
    client: Arc<ApiClient>,
}

impl HttpIssueGateway {
    /// Creates the adapter over a shared API client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct CommentBody<'a> {
    text: &'a str,
}

#[async_trait]
impl IssueGateway for HttpIssueGateway {
    async fn fetch_issues(&self, cancel: &CancellationToken) -> ApiResult<Vec<Issue>> {
        self.client.get("/posts", Some(cancel)).await
    }

    async fn submit_issue(
        &self,
        submission: &IssueSubmission,
        key: &IdempotencyKey,
    ) -> ApiResult<Issue> {
        self.client.post("/posts", submission, Some(key)).await
    }

    async fn toggle_upvote(&self, issue: IssueId) -> ApiResult<Issue> {
        self.client
            .post(&format!("/posts/{issue}/upvote"), &serde_json::json!({}), None)
            .await
    }

    async fn add_comment(&self, issue: IssueId, text: &str) -> ApiResult<Issue> {
        self.client
            .post(
                &format!("/posts/{issue}/comments"),
                &CommentBody { text },
                None,
            )
            .await
    }
}

/// Response shape of the multipart upload endpoint.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    urls: Vec<String>,
}

/// Media uploader backed by `POST /upload/multiple`.
#[derive(Debug, Clone)]
pub struct HttpMediaUploader {
    client: Arc<ApiClient>,
}

impl HttpMediaUploader {
    /// Creates the adapter over a shared API client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MediaUploader for HttpMediaUploader {
    async fn upload(&self, attachments: &[MediaAttachment]) -> ApiResult<Vec<String>> {
        let mut form = reqwest::multipart::Form::new();
        for attachment in attachments {
            let part = reqwest::multipart::Part::bytes(attachment.bytes().to_vec())
                .file_name(attachment.file_name().to_owned())
                .mime_str(attachment.mime_type())
                .map_err(ApiError::transport)?;
            form = form.part("files", part);
        }
        let response: UploadResponse = self.client.post_multipart("/upload/multiple", form).await?;
        Ok(response.urls)
    }
}

//! HTTP client over the remote REST API.
//!
//! One [`ApiClient`] is shared by every HTTP adapter. It owns Bearer-token
//! authorization, JSON encoding/decoding, rejection-body parsing, optional
//! per-request cancellation, and the idempotency header on mutating calls.
//! Nothing here retries: a failure is returned to the initiating action.

use crate::gateway::auth::CurrentUser;
use crate::gateway::config::GatewayConfig;
use crate::gateway::error::{ApiError, ApiResult};
use crate::gateway::idempotency::{IDEMPOTENCY_HEADER, IdempotencyKey};
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the civic-issue REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl ApiClient {
    /// Builds a client from gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: GatewayConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::transport)?;
        Ok(Self { http, config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Fetches the authenticated user via `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or server rejection.
    pub async fn current_user(&self) -> ApiResult<CurrentUser> {
        self.get("/auth/me", None).await
    }

    /// Issues an authorized GET and decodes the JSON response.
    ///
    /// A fired cancellation token discards the in-flight request and yields
    /// [`ApiError::Cancelled`] instead of delivering a stale response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, rejection, or cancellation.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> ApiResult<T> {
        let request = self.authorize(self.http.get(self.config.url_for(path)));
        self.dispatch(request, cancel).await
    }

    /// Issues an unauthenticated GET.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, rejection, or cancellation.
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> ApiResult<T> {
        let request = self.http.get(self.config.url_for(path));
        self.dispatch(request, cancel).await
    }

    /// Issues an authorized POST with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or server rejection.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        idempotency: Option<&IdempotencyKey>,
    ) -> ApiResult<T> {
        let mut request = self
            .authorize(self.http.post(self.config.url_for(path)))
            .json(body);
        if let Some(key) = idempotency {
            request = request.header(IDEMPOTENCY_HEADER, key.as_str());
        }
        self.dispatch(request, None).await
    }

    /// Issues an authorized PUT with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or server rejection.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self
            .authorize(self.http.put(self.config.url_for(path)))
            .json(body);
        self.dispatch(request, None).await
    }

    /// Issues an authorized PATCH with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or server rejection.
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self
            .authorize(self.http.patch(self.config.url_for(path)))
            .json(body);
        self.dispatch(request, None).await
    }

    /// Issues an authorized DELETE, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or server rejection.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.authorize(self.http.delete(self.config.url_for(path)));
        let response = self.send(request, None).await?;
        Self::ensure_accepted(response).await?;
        Ok(())
    }

    /// Issues an authorized multipart POST (file uploads).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or server rejection.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let request = self
            .authorize(self.http.post(self.config.url_for(path)))
            .multipart(form);
        self.dispatch(request, None).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        cancel: Option<&CancellationToken>,
    ) -> ApiResult<T> {
        let response = self.send(request, cancel).await?;
        Self::decode(response).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        cancel: Option<&CancellationToken>,
    ) -> ApiResult<Response> {
        match cancel {
            Some(token) => {
                tokio::select! {
                    () = token.cancelled() => Err(ApiError::Cancelled),
                    outcome = request.send() => outcome.map_err(ApiError::transport),
                }
            }
            None => request.send().await.map_err(ApiError::transport),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let accepted = Self::ensure_accepted(response).await?;
        accepted.json::<T>().await.map_err(ApiError::transport)
    }

    async fn ensure_accepted(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "request rejected by server");
        Err(ApiError::rejection(status.as_u16(), &body))
    }
}

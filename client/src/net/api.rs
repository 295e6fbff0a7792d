//! REST access to the analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound call goes through [`ApiClient::send`], which runs the request
//! authorizer ([`authorize`]) before handing the request to a [`Transport`].
//! Client-side (hydrate) the transport is `gloo-net`; server-side it reports
//! that the network is unavailable, since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. The authorizer never looks
//! at responses. An error body carrying `blocked: true` is a verdict, not an
//! auth failure, and becomes [`ApiError::Blocked`]. Any other 401/403 is
//! reported as [`ApiError::Unauthorized`] and, if installed, passed to the
//! unauthorized hook. Nothing here logs the user out on its own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::types::{AuditLog, AuditStats, Page, SecurePromptRequest, SecurePromptResponse};
use crate::auth::store::CredentialStore;

pub const AUTHORIZATION: &str = "Authorization";

pub const LOGIN_PATH: &str = "/auth/authenticate";
pub const REGISTER_PATH: &str = "/auth/register";
pub const SECURE_PROMPT_PATH: &str = "/secure-prompt";
pub const AUDIT_LOGS_PATH: &str = "/audit/logs";
pub const AUDIT_STATS_PATH: &str = "/audit/stats";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Transport-neutral outbound request, relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
            ..Self::get(path)
        }
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// # Errors
    ///
    /// Returns the serde error when the body is not the expected JSON shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    pub fn error_message(&self) -> Option<String> {
        error_message(&self.body)
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// Looks at `message`, then `error`. Non-JSON bodies and blank strings yield `None`.
pub fn error_message(body: &str) -> Option<String> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    ["message", "error"].into_iter().find_map(|key| {
        map.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
    })
}

/// A block verdict carried in an error body (`403` policy block, `429` rate limit).
fn blocked_verdict(body: &str) -> Option<SecurePromptResponse> {
    serde_json::from_str::<SecurePromptResponse>(body)
        .ok()
        .filter(|verdict| verdict.blocked)
}

/// Attach `Authorization: Bearer <token>` when the store holds a token.
///
/// Without a token the header is left out entirely.
pub fn authorize(request: &mut ApiRequest, store: &dyn CredentialStore) {
    let Some(token) = store.read() else {
        return;
    };
    request.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(AUTHORIZATION));
    request.headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
}

/// Moves an [`ApiRequest`] over the wire.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns a description of the failure when no response was received.
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, String>;
}

/// `gloo-net` fetch transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(url),
                Method::Post => gloo_net::http::Request::post(url),
            };
            for (key, value) in &request.headers {
                builder = builder.header(key, value);
            }
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            let resp = match &request.body {
                Some(body) => builder.json(body).map_err(|e| e.to_string())?.send().await,
                None => builder.send().await,
            }
            .map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            Err("not available on server".to_owned())
        }
    }
}

type UnauthorizedHook = Arc<dyn Fn(u16) + Send + Sync>;

/// Typed client for the backend. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    store: Arc<dyn CredentialStore>,
    transport: Arc<dyn Transport>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn CredentialStore>, transport: Arc<dyn Transport>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            store,
            transport,
            on_unauthorized: None,
        }
    }

    /// Run `hook` with the status whenever a protected call answers 401/403.
    #[must_use]
    pub fn with_unauthorized_hook(mut self, hook: impl Fn(u16) + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Authorize and send `request`, returning whatever status came back.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response was received.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        authorize(&mut request, self.store.as_ref());
        let url = self.url(&request.path);
        self.transport.send(&url, &request).await.map_err(|e| {
            leptos::logging::warn!("{} {} failed: {e}", request.method.as_str(), request.path);
            ApiError::Transport(e)
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let resp = self.send(request).await?;
        if !resp.is_success() {
            if let Some(verdict) = blocked_verdict(&resp.body) {
                return Err(ApiError::Blocked {
                    status: resp.status,
                    reason: verdict.block_reason.filter(|reason| !reason.trim().is_empty()),
                });
            }
        }
        if matches!(resp.status, 401 | 403) {
            if let Some(hook) = &self.on_unauthorized {
                hook(resp.status);
            }
            return Err(ApiError::Unauthorized { status: resp.status });
        }
        if !resp.is_success() {
            return Err(ApiError::Status {
                status: resp.status,
                message: resp.error_message(),
            });
        }
        resp.json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Submit a prompt for risk analysis via `POST /secure-prompt`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-success statuses, or
    /// an unreadable verdict.
    pub async fn analyze_prompt(&self, request: &SecurePromptRequest) -> Result<SecurePromptResponse, ApiError> {
        self.fetch(ApiRequest::post(SECURE_PROMPT_PATH, serde_json::json!(request)))
            .await
    }

    /// Fetch one page of audit records via `GET /audit/logs`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-success statuses, or
    /// an unreadable page.
    pub async fn audit_logs(&self, page: u32, size: u32) -> Result<Page<AuditLog>, ApiError> {
        self.fetch(
            ApiRequest::get(AUDIT_LOGS_PATH)
                .with_query("page", page)
                .with_query("size", size),
        )
        .await
    }

    /// Fetch aggregate statistics via `GET /audit/stats`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-success statuses, or
    /// an unreadable payload.
    pub async fn audit_stats(&self) -> Result<AuditStats, ApiError> {
        self.fetch(ApiRequest::get(AUDIT_STATS_PATH)).await
    }
}

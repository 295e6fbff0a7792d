//! Credential exchange with the backend.
//!
//! Both calls are single attempts: a rejected or failed credential submission
//! is never repeated on the user's behalf. Whatever shape the backend's error
//! body has, it leaves here as an [`AuthError`].

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use async_trait::async_trait;

use super::error::AuthError;
use super::token::{DEFAULT_PLAN, DEFAULT_ROLE};
use crate::net::api::{ApiClient, ApiRequest, LOGIN_PATH, REGISTER_PATH};
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest};

/// Name sent for a first or last name the user left blank.
pub const PLACEHOLDER_NAME: &str = "User";

/// Sign-up details. Blank names fall back to [`PLACEHOLDER_NAME`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

impl Registration {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            firstname: None,
            lastname: None,
        }
    }

    /// Wire body with placeholder names filled in.
    pub fn request(&self) -> RegisterRequest<'_> {
        RegisterRequest {
            email: &self.email,
            password: &self.password,
            firstname: name_or_placeholder(self.firstname.as_deref()),
            lastname: name_or_placeholder(self.lastname.as_deref()),
            role: DEFAULT_ROLE,
            plan: DEFAULT_PLAN,
        }
    }
}

fn name_or_placeholder(name: Option<&str>) -> &str {
    name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or(PLACEHOLDER_NAME)
}

/// Exchanges credentials for a bearer token.
#[async_trait(?Send)]
pub trait AuthGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AuthError`] when the backend rejects the credentials or the
    /// call fails.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError`] when the backend rejects the registration or the
    /// call fails.
    async fn register(&self, registration: &Registration) -> Result<AuthResponse, AuthError>;
}

/// [`AuthGateway`] over the REST API.
#[derive(Clone)]
pub struct HttpAuthGateway {
    api: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn submit(&self, request: ApiRequest) -> Result<AuthResponse, AuthError> {
        let resp = self
            .api
            .send(request)
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        if !resp.is_success() {
            return Err(AuthError::Rejected {
                status: resp.status,
                message: resp.error_message(),
            });
        }
        resp.json::<AuthResponse>()
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let body = serde_json::json!(LoginRequest { email, password });
        self.submit(ApiRequest::post(LOGIN_PATH, body)).await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, AuthError> {
        let body = serde_json::json!(registration.request());
        self.submit(ApiRequest::post(REGISTER_PATH, body)).await
    }
}

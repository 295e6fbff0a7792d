//! In-process fakes shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use futures::channel::oneshot;

use crate::auth::error::AuthError;
use crate::auth::gateway::{AuthGateway, Registration};
use crate::auth::store::MemoryStore;
use crate::net::api::{ApiClient, ApiRequest, ApiResponse, Transport};
use crate::net::types::AuthResponse;

/// Signed-looking token whose payload is `claims`.
pub fn token_for(claims: &serde_json::Value) -> String {
    format!(
        "{}.{}.c2lnbmF0dXJl",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}

/// Transport that replays canned results and records what it was sent.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<ApiResponse, String>>>>,
    sent: Arc<Mutex<Vec<(String, ApiRequest)>>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(Ok(ApiResponse::new(status, body.to_string())))
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.push(Err(reason.to_owned()))
    }

    fn push(&self, reply: Result<ApiResponse, String>) -> &Self {
        self.replies.lock().unwrap_or_else(PoisonError::into_inner).push_back(reply);
        self
    }

    /// `(url, request)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, ApiRequest)> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((url.to_owned(), request.clone()));
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply".to_owned()))
    }
}

pub const TEST_BASE_URL: &str = "http://api.test/api/v1";

/// API client wired to a fresh store and scripted transport.
pub fn scripted_client() -> (ApiClient, MemoryStore, ScriptedTransport) {
    let store = MemoryStore::default();
    let transport = ScriptedTransport::default();
    let client = ApiClient::new(TEST_BASE_URL, Arc::new(store.clone()), Arc::new(transport.clone()));
    (client, store, transport)
}

type Reply = Result<AuthResponse, AuthError>;

/// Gateway whose calls stay pending until the test resolves them.
#[derive(Clone, Default)]
pub struct ManualGateway {
    pending: Arc<Mutex<VecDeque<oneshot::Sender<Reply>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ManualGateway {
    /// Labels of the gateway calls started so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Resolve the oldest pending call.
    pub fn resolve(&self, reply: Reply) {
        let sender = self.pending.lock().unwrap_or_else(PoisonError::into_inner).pop_front();
        if let Some(sender) = sender {
            let _ = sender.send(reply);
        }
    }

    async fn wait(&self, label: String) -> Reply {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap_or_else(PoisonError::into_inner).push_back(tx);
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(label);
        rx.await.unwrap_or(Err(AuthError::Transport("gateway dropped".to_owned())))
    }
}

#[async_trait(?Send)]
impl AuthGateway for ManualGateway {
    async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse, AuthError> {
        self.wait(format!("login:{email}")).await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, AuthError> {
        self.wait(format!("register:{}", registration.email)).await
    }
}

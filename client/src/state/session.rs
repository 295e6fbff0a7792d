//! Session lifecycle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard, shell and login page all read one [`SessionContext`],
//! constructed in `app::App` and handed down as a prop. The token is the source
//! of truth for "is authenticated"; the identity is a display hint decoded from
//! it.
//!
//! DESIGN
//! ======
//! [`SessionState`] is plain data with pure transitions so the state machine
//! (`Anonymous -> Authenticating -> Authenticated`, `Authenticated -> Anonymous`)
//! is testable without a browser. [`SessionContext`] owns the state in a
//! reactive signal and serializes writers: credential calls queue on an async
//! mutex (the phase reads `Authenticating` from submission until the last
//! queued call settles), and `logout` bumps an epoch so an older in-flight call cannot
//! resurrect a session that was just cleared.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use futures::lock::Mutex;
use leptos::prelude::*;

use crate::auth::error::AuthError;
use crate::auth::gateway::{AuthGateway, Registration};
use crate::auth::store::CredentialStore;
use crate::auth::token::{self, Identity};
use crate::net::types::AuthResponse;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Anonymous,
    /// A login or register call is in flight.
    Authenticating,
    Authenticated,
}

/// Token plus the identity derived from it.
///
/// `identity` is only set when `token` is: either decoded from the token, or
/// provisional right after login/register.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub identity: Option<Identity>,
    pub phase: SessionPhase,
}

impl SessionState {
    /// Seed from a token left in the credential store by an earlier page load.
    ///
    /// A token that fails to decode still counts as authenticated, with no
    /// identity, until the backend rejects it.
    pub fn restore(stored: Option<String>) -> Self {
        let Some(token) = stored else {
            return Self::default();
        };
        let identity = match token::decode(&token) {
            Ok(identity) => Some(identity),
            Err(e) => {
                leptos::logging::warn!("ignoring undecodable session token: {e}");
                None
            }
        };
        Self {
            token: Some(token),
            identity,
            phase: SessionPhase::Authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn begin(&mut self) {
        self.phase = SessionPhase::Authenticating;
    }

    /// Credential call succeeded; `email` is what the user typed.
    pub fn accept(&mut self, token: String, email: &str) {
        self.token = Some(token);
        self.identity = Some(Identity::provisional(email));
        self.phase = SessionPhase::Authenticated;
    }

    /// Credential call failed; whatever session existed before stays.
    pub fn reject(&mut self) {
        self.phase = if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Shared handle to the session. Clones observe and mutate the same session.
#[derive(Clone)]
pub struct SessionContext {
    state: ArcRwSignal<SessionState>,
    epoch: Arc<AtomicU64>,
    writer: Arc<Mutex<()>>,
    queued: Arc<AtomicUsize>,
    store: Arc<dyn CredentialStore>,
    gateway: Arc<dyn AuthGateway>,
}

impl SessionContext {
    /// Build the session, reading the credential store once.
    pub fn new(store: Arc<dyn CredentialStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        let state = SessionState::restore(store.read());
        Self {
            state: ArcRwSignal::new(state),
            epoch: Arc::new(AtomicU64::new(0)),
            writer: Arc::new(Mutex::new(())),
            queued: Arc::new(AtomicUsize::new(0)),
            store,
            gateway,
        }
    }

    /// Current state (tracked when read inside a reactive scope).
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token.clone())
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.with(|s| s.phase)
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the gateway's [`AuthError`] untouched, or
    /// [`AuthError::Superseded`] when a logout ran while the call was pending.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let ticket = self.enqueue();
        let _writer = self.writer.lock().await;
        let epoch = self.begin();
        let result = self.gateway.login(email, password).await;
        drop(ticket);
        self.finish(epoch, email, result)
    }

    /// Create an account and log in with it.
    ///
    /// # Errors
    ///
    /// Same as [`SessionContext::login`].
    pub async fn register(&self, registration: &Registration) -> Result<(), AuthError> {
        let ticket = self.enqueue();
        let _writer = self.writer.lock().await;
        let epoch = self.begin();
        let result = self.gateway.register(registration).await;
        drop(ticket);
        self.finish(epoch, &registration.email, result)
    }

    /// Drop the token and identity and clear the credential store.
    pub fn logout(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.store.clear();
        self.state.update(SessionState::clear);
    }

    /// Count the caller as waiting and show `Authenticating` before it queues
    /// on the writer lock.
    fn enqueue(&self) -> QueuedCall {
        self.queued.fetch_add(1, Ordering::SeqCst);
        self.state.update(SessionState::begin);
        QueuedCall(self.queued.clone())
    }

    /// Keep showing `Authenticating` while other calls are still queued.
    fn settle(&self) {
        if self.queued.load(Ordering::SeqCst) > 0 {
            self.state.update(SessionState::begin);
        }
    }

    fn begin(&self) -> u64 {
        self.state.update(SessionState::begin);
        self.epoch.load(Ordering::SeqCst)
    }

    fn finish(&self, epoch: u64, email: &str, result: Result<AuthResponse, AuthError>) -> Result<(), AuthError> {
        if self.epoch.load(Ordering::SeqCst) != epoch {
            return Err(AuthError::Superseded);
        }
        match result {
            Ok(AuthResponse { token }) => {
                self.store.write(&token);
                self.state.update(|s| s.accept(token, email));
                self.settle();
                Ok(())
            }
            Err(e) => {
                self.state.update(SessionState::reject);
                self.settle();
                Err(e)
            }
        }
    }
}

/// One credential call between submission and gateway reply. Dropping it,
/// including when the call's future is cancelled, releases the slot.
struct QueuedCall(Arc<AtomicUsize>);

impl Drop for QueuedCall {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

//! Durable home of the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store mirrors `SessionState::token` and nothing else: identity is
//! always re-derived from the token. The browser implementation survives page
//! reloads; the in-memory one backs SSR renders and tests.
//!
//! TRADE-OFFS
//! ==========
//! No expiry or encryption here. Token expiry is enforced by the backend on
//! each request.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

/// The single `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Read/write access to the persisted bearer token.
///
/// Calls are synchronous and each one is atomic with respect to the single key.
/// An empty stored value reads as absent.
pub trait CredentialStore: Send + Sync {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// Browser `localStorage` backed store. No-ops outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for LocalStorageStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    leptos::logging::warn!("failed to persist session token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    leptos::logging::warn!("failed to clear session token");
                }
            }
        }
    }
}

/// Process-local store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    /// Store pre-seeded with `token`, as if left behind by an earlier page load.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn read(&self) -> Option<String> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.clone().and_then(non_empty)
    }

    fn write(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}

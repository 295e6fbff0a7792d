//! Proof-of-identity handling for the console.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` persists the bearer token, `token` turns it into a display identity,
//! and `gateway` exchanges credentials for a token. `state::session` composes
//! all three into the session lifecycle.

pub mod error;
pub mod gateway;
pub mod store;
pub mod token;

//! Networking modules for the analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request construction and the bearer header, `error` classifies
//! failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;

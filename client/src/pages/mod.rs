//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped loading and form state and receives the
//! session or API client it needs as props from `app`.

pub mod analyzer;
pub mod audit;
pub mod dashboard;
pub mod login;
pub mod settings;

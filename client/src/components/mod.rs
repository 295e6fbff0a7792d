//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `protected` gates routes on the session and wraps allowed pages in the
//! `layout` shell.

pub mod layout;
pub mod protected;

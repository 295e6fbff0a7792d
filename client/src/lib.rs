//! # console
//!
//! Leptos + WASM frontend for the AI prompt-security console.
//!
//! This crate contains the authentication session (token decoding, credential
//! persistence, login/register/logout), the authorized API client, route
//! guarding, and the dashboard, analyzer, audit-log and settings pages. The
//! `ssr` feature exposes `app::shell` for the `console-server` host.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

/// Browser entry point: installs the panic hook and logger, then hydrates the
/// server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}

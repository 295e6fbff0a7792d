//! Build-time configuration.
//!
//! `API_BASE_URL` is read when the crate is compiled (the WASM bundle has no
//! process environment at runtime). It is the only tunable of the console.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// API base URL for this build.
pub fn api_base_url() -> String {
    resolve_base_url(option_env!("API_BASE_URL"))
}

/// Blank overrides fall back to the default; trailing slashes are dropped.
pub fn resolve_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

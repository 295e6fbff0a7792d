//! Bearer-token payload decoding.
//!
//! DESIGN
//! ======
//! Tokens are opaque `header.payload.signature` strings. Only the payload is
//! read and the signature is never checked, so the resulting [`Identity`] is a
//! display hint. Every authorization decision stays with the backend.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde_json::{Map, Value};

use super::error::MalformedToken;

pub const DEFAULT_ROLE: &str = "USER";
pub const DEFAULT_PLAN: &str = "FREE";

/// Who the console believes is logged in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub role: String,
    pub plan: String,
}

impl Identity {
    /// Identity with default role and plan, used right after login/register
    /// before the token has been re-read.
    pub fn provisional(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: DEFAULT_ROLE.to_owned(),
            plan: DEFAULT_PLAN.to_owned(),
        }
    }
}

/// Decode the identity claims carried in `token`.
///
/// The email comes from `sub`, falling back to `email`. `role` and `plan`
/// default to `USER` / `FREE` when absent or not strings.
///
/// # Errors
///
/// Returns [`MalformedToken`] when the token is not three segments or the
/// payload is not a base64url JSON object with a subject.
pub fn decode(token: &str) -> Result<Identity, MalformedToken> {
    let payload = payload_segment(token)?;
    let bytes = decode_segment(payload)?;
    let claims: Map<String, Value> = match serde_json::from_slice(&bytes) {
        Ok(Value::Object(map)) => map,
        _ => return Err(MalformedToken::Payload),
    };

    let email = string_claim(&claims, "sub")
        .or_else(|| string_claim(&claims, "email"))
        .ok_or(MalformedToken::MissingSubject)?;

    Ok(Identity {
        email: email.to_owned(),
        role: string_claim(&claims, "role").unwrap_or(DEFAULT_ROLE).to_owned(),
        plan: string_claim(&claims, "plan").unwrap_or(DEFAULT_PLAN).to_owned(),
    })
}

fn payload_segment(token: &str) -> Result<&str, MalformedToken> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(_signature), None) if !header.is_empty() && !payload.is_empty() => {
            Ok(payload)
        }
        _ => Err(MalformedToken::Segments),
    }
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, MalformedToken> {
    let trimmed = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .map_err(|_| MalformedToken::Encoding)
}

// Empty strings count as absent.
fn string_claim<'a>(claims: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    claims.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

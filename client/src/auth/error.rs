//! Error types for credential exchange and token decoding.
//!
//! ERROR HANDLING
//! ==============
//! Backend error payloads are normalized into [`AuthError`] at the gateway
//! boundary, so pages only ever render `display_message()`. [`MalformedToken`]
//! never reaches the UI: the session logs it and drops the identity.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the backend rejected a credential call without saying why.
pub const GENERIC_AUTH_MESSAGE: &str = "An error occurred";

/// Local decode failure for a cached or freshly issued bearer token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedToken {
    /// Not exactly three dot-separated segments, or an empty header/payload.
    #[error("token must have three dot-separated segments")]
    Segments,
    /// The payload segment is not base64url.
    #[error("token payload is not valid base64url")]
    Encoding,
    /// The payload decoded, but not to a JSON object.
    #[error("token payload is not a JSON object")]
    Payload,
    /// The payload carries neither a `sub` nor an `email` claim.
    #[error("token payload has no subject or email claim")]
    MissingSubject,
}

/// Failure of a login or register call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend answered with a non-success status.
    #[error("authentication rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("authentication request failed: {0}")]
    Transport(String),
    /// A success response whose body carried no usable token.
    #[error("authentication response was not understood: {0}")]
    InvalidResponse(String),
    /// A logout happened while the call was in flight; its result was dropped.
    #[error("authentication superseded by logout")]
    Superseded,
}

impl AuthError {
    /// Backend-provided message, when the rejection carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text suitable for the login form.
    pub fn display_message(&self) -> &str {
        self.message().unwrap_or(GENERIC_AUTH_MESSAGE)
    }
}

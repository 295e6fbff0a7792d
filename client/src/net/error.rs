//! Failures of non-auth backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401/403: the backend refused the presented (or missing) token.
    #[error("request was not authorized (status {status})")]
    Unauthorized { status: u16 },
    /// Any other non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The backend refused the request with a block verdict (policy or rate
    /// limit) rather than an auth failure.
    #[error("request blocked with status {status}")]
    Blocked { status: u16, reason: Option<String> },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for inline page errors.
    pub fn display_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => "Your session is no longer accepted. Log out and sign in again.".to_owned(),
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::Blocked { reason: Some(reason), .. } => reason.clone(),
            Self::Blocked { reason: None, .. } => "Request was blocked by policy.".to_owned(),
            other => other.to_string(),
        }
    }
}

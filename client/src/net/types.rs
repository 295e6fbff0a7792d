//! Wire DTOs for the analysis backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Everything past the auth
//! exchange is pass-through payload: the console renders it but never derives
//! access decisions from it, so response fields default liberally instead of
//! failing the whole page on a missing value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST /auth/authenticate` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /auth/register` body. Role and plan are always `USER` / `FREE`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub role: &'a str,
    pub plan: &'a str,
}

/// Token-bearing body returned by both auth endpoints. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// `POST /secure-prompt` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SecurePromptRequest {
    pub prompt: String,
    pub model: String,
    pub policy: String,
}

/// Risk bucket assigned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Wire spelling, also used as the `<select>` option value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    /// Badge modifier class.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "risk-badge risk-badge--low",
            Self::Medium => "risk-badge risk-badge--medium",
            Self::High => "risk-badge risk-badge--high",
            Self::Critical => "risk-badge risk-badge--critical",
        }
    }
}

/// Analysis verdict for a submitted prompt.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecurePromptResponse {
    pub request_id: Option<String>,
    pub risk_score: i32,
    pub risk_level: RiskLevel,
    pub blocked: bool,
    pub sanitized_prompt: Option<String>,
    pub detected_patterns: Vec<String>,
    pub block_reason: Option<String>,
    pub response: Option<String>,
}

/// One audit record produced by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditLog {
    pub id: i64,
    pub user_id: String,
    pub endpoint: String,
    pub method: String,
    pub prompt: Option<String>,
    pub response: Option<String>,
    pub risk_score: i32,
    pub risk_level: RiskLevel,
    pub blocked: bool,
    pub block_reason: Option<String>,
    pub sanitized_prompt: Option<String>,
    pub ip_address: String,
    pub user_agent: String,
    pub timestamp: String,
}

/// Paged listing in the backend's `Page` shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}

/// Named count in the risk distribution.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskBucket {
    pub name: String,
    pub value: u64,
}

/// Request volume for one day.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyRequests {
    pub date: String,
    pub requests: u64,
    pub blocked: u64,
}

/// Aggregates served by `GET /audit/stats`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditStats {
    pub total_requests: u64,
    pub blocked_requests: u64,
    pub average_risk_score: f64,
    pub requests_today: u64,
    pub risk_distribution: Vec<RiskBucket>,
    pub requests_over_time: Vec<DailyRequests>,
}

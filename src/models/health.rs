//! Backend liveness probe result.

use serde::Deserialize;
use serde_json::Value;

use super::lenient::{lenient, lenient_string};

/// What `GET /health` told us. Only the HTTP status is contractual; the body
/// fields are informational and may all be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(skip)]
    pub http_status: u16,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,
    /// Per-provider availability as reported by the backend
    #[serde(default, deserialize_with = "lenient")]
    pub api_status: Option<Value>,
}

impl HealthStatus {
    /// Parses a health body; anything unreadable yields an empty status.
    pub fn from_body(http_status: u16, body: &str) -> Self {
        let mut health: HealthStatus = serde_json::from_str(body).unwrap_or_default();
        health.http_status = http_status;
        health
    }
}

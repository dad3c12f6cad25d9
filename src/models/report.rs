//! Backend verdict: raw wire shape and the normalized report built from it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::checks::Checks;
use super::lenient::{lenient, lenient_int, lenient_number, lenient_string, lenient_string_list};
use super::status::StatusClass;
use crate::validation::hostname_of;

/// The response exactly as deployments send it.
///
/// Field names differ between backend versions (`score` vs `risk_score`,
/// `issues` vs `total_issues`); both spellings are accepted here and merged
/// in `CheckReport::from_raw`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawCheckResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    hostname: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    status_class: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    issues: Vec<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    total_issues: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    warnings: Vec<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    recommendation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    checks: Option<Map<String, Value>>,
}

/// Where a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    /// Fresh answer from the backend
    Backend,
    /// Reused backend answer from the in-memory cache
    Cache,
    /// Local heuristic, backend unavailable
    Fallback,
}

/// Normalized verdict for one URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub url: String,
    pub hostname: Option<String>,
    /// 0-100, higher is riskier
    pub risk_score: u8,
    pub status: String,
    pub status_class: StatusClass,
    pub issues: Vec<String>,
    /// Backend count when it only sends a number, else `issues.len()`
    pub total_issues: usize,
    pub warnings: Vec<String>,
    pub confidence: Option<u8>,
    pub recommendation: Option<String>,
    pub checks: Checks,
    pub source: ResultSource,
}

impl CheckReport {
    /// Builds a report from any decoded JSON body.
    ///
    /// Non-object bodies produce a degraded report for `submitted_url` rather
    /// than an error.
    pub fn from_value(value: Value, submitted_url: &str) -> Self {
        let raw = match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_else(|e| {
                log::warn!("Backend response did not match the expected shape: {}", e);
                RawCheckResponse::default()
            }),
            other => {
                log::warn!(
                    "Backend response is not a JSON object (got {}), rendering defaults",
                    json_kind(&other)
                );
                RawCheckResponse::default()
            }
        };
        Self::from_raw(raw, submitted_url)
    }

    pub(crate) fn from_raw(raw: RawCheckResponse, submitted_url: &str) -> Self {
        let url = raw
            .url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| submitted_url.to_string());
        let hostname = raw
            .hostname
            .filter(|h| !h.trim().is_empty())
            .or_else(|| hostname_of(&url));

        let risk_score = raw.risk_score.or(raw.score).map(clamp_percent).unwrap_or(0);
        let status_class = raw
            .status_class
            .as_deref()
            .and_then(StatusClass::parse)
            .unwrap_or_else(|| StatusClass::from_score(risk_score));
        let status = raw
            .status
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| status_class.label().to_string());

        let total_issues = match raw.total_issues {
            Some(n) if n >= 0 => (n as usize).max(raw.issues.len()),
            _ => raw.issues.len(),
        };

        let checks = raw
            .checks
            .as_ref()
            .map(Checks::from_map)
            .unwrap_or_default();

        CheckReport {
            url,
            hostname,
            risk_score,
            status,
            status_class,
            issues: raw.issues,
            total_issues,
            warnings: raw.warnings,
            confidence: raw.confidence.map(clamp_percent),
            recommendation: raw.recommendation.filter(|r| !r.trim().is_empty()),
            checks,
            source: ResultSource::Backend,
        }
    }

    /// Same report, relabeled with a different origin.
    pub fn with_source(mut self, source: ResultSource) -> Self {
        self.source = source;
        self
    }

    /// Backend confidence, or the check success rate when it sent none.
    pub fn effective_confidence(&self) -> u8 {
        self.confidence
            .filter(|c| *c > 0)
            .unwrap_or_else(|| self.checks.tally.success_rate())
    }
}

fn clamp_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

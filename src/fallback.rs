//! Degraded mode: a local stand-in verdict when the backend cannot answer.
//!
//! This is not a detector. It only keeps the user from getting nothing at all
//! and always says so in its warnings.

use crate::config::{
    FALLBACK_BASE_SCORE, FALLBACK_CONFIDENCE, FALLBACK_LONG_URL_PENALTY,
    FALLBACK_LONG_URL_THRESHOLD, FALLBACK_NO_HTTPS_PENALTY,
};
use crate::models::{CheckReport, Checks, ResultSource, StatusClass};
use crate::validation::hostname_of;

pub const NO_HTTPS_ISSUE: &str = "Website does not use HTTPS";
pub const BACKEND_UNAVAILABLE_WARNING: &str =
    "Backend unavailable: this is a local heuristic, not a real detector";
pub const VERIFY_MANUALLY_WARNING: &str =
    "Verify the domain manually before entering any credentials";

/// Heuristic verdict for `url`.
///
/// Scoring: base 30, +25 when not HTTPS, +10 when longer than 100 characters.
pub fn fallback_analysis(url: &str) -> CheckReport {
    let mut score = FALLBACK_BASE_SCORE;
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    if !url.starts_with("https://") {
        score = score.saturating_add(FALLBACK_NO_HTTPS_PENALTY);
        issues.push(NO_HTTPS_ISSUE.to_string());
    }

    let length = url.chars().count();
    if length > FALLBACK_LONG_URL_THRESHOLD {
        score = score.saturating_add(FALLBACK_LONG_URL_PENALTY);
        warnings.push(format!("URL is unusually long ({length} characters)"));
    }

    warnings.push(BACKEND_UNAVAILABLE_WARNING.to_string());
    warnings.push(VERIFY_MANUALLY_WARNING.to_string());

    let score = score.min(100);
    let status_class = StatusClass::from_score(score);

    CheckReport {
        url: url.to_string(),
        hostname: hostname_of(url),
        risk_score: score,
        status: format!("{} (offline estimate)", status_class.label()),
        status_class,
        total_issues: issues.len(),
        issues,
        warnings,
        confidence: Some(FALLBACK_CONFIDENCE),
        recommendation: None,
        checks: Checks::default(),
        source: ResultSource::Fallback,
    }
}

//! Verdict severity buckets.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Overall verdict severity, from least to most dangerous.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatusClass {
    Safe,
    Caution,
    Warning,
    Danger,
    Critical,
}

impl StatusClass {
    /// Bucket for a 0-100 risk score, used when the backend sends no class.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => StatusClass::Critical,
            60..=79 => StatusClass::Danger,
            40..=59 => StatusClass::Warning,
            20..=39 => StatusClass::Caution,
            _ => StatusClass::Safe,
        }
    }

    /// Parses a backend `status_class`, ignoring case and surrounding space.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }

    /// Default status headline when the backend sends none.
    pub fn label(self) -> &'static str {
        match self {
            StatusClass::Safe => "Safe",
            StatusClass::Caution => "Caution",
            StatusClass::Warning => "Suspicious",
            StatusClass::Danger => "Dangerous",
            StatusClass::Critical => "Phishing Detected",
        }
    }

    /// Danger or critical.
    pub fn is_risky(self) -> bool {
        matches!(self, StatusClass::Danger | StatusClass::Critical)
    }
}

impl std::fmt::Display for StatusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

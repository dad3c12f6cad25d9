//! Per-provider sub-reports from the backend's `checks` map.
//!
//! Every known key gets its own struct with explicit optional fields. Unknown
//! keys are not modeled; they only count toward the `CheckTally`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::{
    is_truthy, lenient, lenient_flag, lenient_int, lenient_number, lenient_string,
    lenient_string_list,
};

/// SSL/TLS certificate inspection (`checks.ssl`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslCheck {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_valid: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub issued_to: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub issuer: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub valid_from: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub valid_until: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub days_remaining: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tls_version: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cipher_suite: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ssl_strength: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub error: Option<String>,
}

impl SslCheck {
    /// `ssl_strength == "strong"`, case-insensitive.
    pub fn is_strong(&self) -> bool {
        self.ssl_strength
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("strong"))
    }
}

/// Resolved DNS records, keyed by record type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsRecords {
    #[serde(rename = "A", default, deserialize_with = "lenient_string_list")]
    pub a: Vec<String>,
    #[serde(rename = "AAAA", default, deserialize_with = "lenient_string_list")]
    pub aaaa: Vec<String>,
    #[serde(rename = "MX", default, deserialize_with = "lenient_string_list")]
    pub mx: Vec<String>,
    #[serde(rename = "NS", default, deserialize_with = "lenient_string_list")]
    pub ns: Vec<String>,
    #[serde(rename = "TXT", default, deserialize_with = "lenient_string_list")]
    pub txt: Vec<String>,
}

impl DnsRecords {
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
            && self.aaaa.is_empty()
            && self.mx.is_empty()
            && self.ns.is_empty()
            && self.txt.is_empty()
    }
}

/// DNS analysis (`checks.dns`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsCheck {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub issues: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub records: Option<DnsRecords>,
}

/// Domain registration data (`checks.whois`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhoisCheck {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_int")]
    pub age_days: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub registrar: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub creation_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub expiration_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub issues: Vec<String>,
}

/// Age bucket of a registered domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainAge {
    /// Under a week old
    VeryNew,
    /// Under a month old
    New,
    /// Under a year old
    RelativelyNew,
    /// A year or older
    Established,
    /// Backend did not report an age
    Unknown,
}

impl WhoisCheck {
    pub fn age_bucket(&self) -> DomainAge {
        match self.age_days {
            None => DomainAge::Unknown,
            Some(d) if d < 7 => DomainAge::VeryNew,
            Some(d) if d < 30 => DomainAge::New,
            Some(d) if d < 365 => DomainAge::RelativelyNew,
            Some(_) => DomainAge::Established,
        }
    }
}

/// VirusTotal engine verdicts (`checks.virustotal`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirusTotalCheck {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_int")]
    pub malicious: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub suspicious: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub harmless: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub undetected: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub total_engines: Option<i64>,
}

impl VirusTotalCheck {
    pub fn malicious_count(&self) -> i64 {
        self.malicious.unwrap_or(0)
    }
}

/// IPQualityScore reputation (`checks.ipqualityscore`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpQualityScoreCheck {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_number")]
    pub risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub phishing: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub malware: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub suspicious: bool,
}

/// IPQualityScore risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl IpQualityScoreCheck {
    /// Score rounded to an integer, 0 when absent.
    pub fn score(&self) -> i64 {
        self.risk_score.map(|s| s.round() as i64).unwrap_or(0)
    }

    pub fn band(&self) -> RiskBand {
        match self.score() {
            s if s > 70 => RiskBand::VeryHigh,
            s if s > 50 => RiskBand::High,
            s if s > 30 => RiskBand::Medium,
            _ => RiskBand::Low,
        }
    }
}

/// Payload of the RapidAPI phishing verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RapidApiVerdict {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_phishing: bool,
    #[serde(default, deserialize_with = "lenient_number")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub risk_level: Option<String>,
}

/// RapidAPI phishing risk API (`checks.rapidapi_phishing`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RapidApiCheck {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<RapidApiVerdict>,
}

/// Telegram bot verification (`checks.telegram`), present only for t.me links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelegramCheck {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_official: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
}

/// Google Safe Browsing lookup (`checks.google_safe_browsing`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafeBrowsingCheck {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub is_safe: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub threats: Vec<String>,
}

impl SafeBrowsingCheck {
    /// Flagged when threats are listed or `is_safe` is explicitly false.
    pub fn is_flagged(&self) -> bool {
        !self.threats.is_empty() || self.is_safe == Some(false)
    }
}

/// Page content analysis (`checks.content`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentCheck {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub has_login_form: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub has_password_field: bool,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub suspicious_keywords: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub issues: Vec<String>,
}

/// How many provider checks ran and how many produced a usable result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckTally {
    pub total: usize,
    pub successful: usize,
}

impl CheckTally {
    /// Counts a raw `checks` map.
    ///
    /// A check is successful when it is an object and is not marked
    /// `success: false` together with a non-empty `error`. Arrays carry
    /// neither field and count as successful.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let successful = map
            .values()
            .filter(|check| match check {
                Value::Object(obj) => {
                    let failed = obj.get("success") == Some(&Value::Bool(false));
                    let has_error = obj.get("error").is_some_and(is_truthy);
                    !(failed && has_error)
                }
                Value::Array(_) => true,
                _ => false,
            })
            .count();
        CheckTally {
            total: map.len(),
            successful,
        }
    }

    /// Successful share in percent, 0 when nothing ran.
    pub fn success_rate(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.successful as f64 / self.total as f64) * 100.0).round() as u8
    }
}

/// Typed view of the backend's `checks` map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Checks {
    pub ssl: Option<SslCheck>,
    pub dns: Option<DnsCheck>,
    pub whois: Option<WhoisCheck>,
    pub virustotal: Option<VirusTotalCheck>,
    pub ipqualityscore: Option<IpQualityScoreCheck>,
    pub rapidapi_phishing: Option<RapidApiCheck>,
    pub telegram: Option<TelegramCheck>,
    pub google_safe_browsing: Option<SafeBrowsingCheck>,
    pub content: Option<ContentCheck>,
    pub tally: CheckTally,
}

impl Checks {
    /// Builds the typed view; entries that are not objects are skipped.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Checks {
            ssl: section(map, "ssl"),
            dns: section(map, "dns"),
            whois: section(map, "whois"),
            virustotal: section(map, "virustotal"),
            ipqualityscore: section(map, "ipqualityscore"),
            rapidapi_phishing: section(map, "rapidapi_phishing"),
            telegram: section(map, "telegram"),
            google_safe_browsing: section(map, "google_safe_browsing"),
            content: section(map, "content"),
            tally: CheckTally::from_map(map),
        }
    }
}

fn section<T: serde::de::DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    match map.get(key) {
        Some(value @ Value::Object(_)) => match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::debug!("Ignoring unreadable '{}' check: {}", key, e);
                None
            }
        },
        _ => None,
    }
}

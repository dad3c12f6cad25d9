//! Result rendering.
//!
//! A `CheckReport` can be written three ways:
//! - `text`: colored terminal lines
//! - `html`: self-contained fragments (or a full page) with every backend
//!   string escaped
//! - JSON: the normalized report itself
//!
//! The verdict (icon, advice, header class) depends only on the status class.

mod html;
mod text;

use colored::Color;
use serde_json::json;

use crate::config::OutputFormat;
use crate::error_handling::CheckError;
use crate::models::{CheckReport, StatusClass};

pub use html::{
    api_results_html, content_html, dns_html, error_html, issues_html, page_html, result_html,
    safe_browsing_html, ssl_html, telegram_html, whois_html,
};
pub use text::{render_error, render_report};

/// Presentation of a status class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub icon: &'static str,
    pub advice: &'static str,
    /// CSS class of the result panel: `safe`, `warning` or `danger`
    pub header_class: &'static str,
    pub color: Color,
}

impl Verdict {
    pub fn for_class(class: StatusClass) -> Self {
        match class {
            StatusClass::Critical => Verdict {
                icon: "🚨",
                advice: "DO NOT OPEN THIS LINK! This site is very dangerous and was detected as phishing.",
                header_class: "danger",
                color: Color::BrightRed,
            },
            StatusClass::Danger => Verdict {
                icon: "🚫",
                advice: "Avoid this site! There are strong indications that it is malicious.",
                header_class: "danger",
                color: Color::Red,
            },
            StatusClass::Warning => Verdict {
                icon: "⚠️",
                advice: "Be careful! Several suspicious indicators were found on this site.",
                header_class: "warning",
                color: Color::Yellow,
            },
            StatusClass::Caution => Verdict {
                icon: "🔶",
                advice: "Generally safe, but double-check the URL and do not enter sensitive data.",
                header_class: "warning",
                color: Color::BrightYellow,
            },
            StatusClass::Safe => Verdict {
                icon: "✅",
                advice: "This site looks safe to visit based on our analysis.",
                header_class: "safe",
                color: Color::Green,
            },
        }
    }
}

/// Backend recommendation when present, else the class advice.
pub fn advice_for(report: &CheckReport) -> &str {
    report
        .recommendation
        .as_deref()
        .unwrap_or_else(|| Verdict::for_class(report.status_class).advice)
}

/// Hostname to show, falling back to the authority part of the URL.
pub fn display_hostname(report: &CheckReport) -> String {
    report
        .hostname
        .clone()
        .or_else(|| report.url.split('/').nth(2).map(str::to_string))
        .unwrap_or_default()
}

/// Renders one successful check in the requested format.
///
/// # Errors
///
/// Only JSON output can fail, when serialization fails.
pub fn render_report_as(
    report: &CheckReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Text => render_report(report),
        OutputFormat::Html => result_html(report),
        OutputFormat::Json => serde_json::to_string(report)?,
    })
}

/// Renders one failed check in the requested format.
pub fn render_error_as(
    url: &str,
    error: &CheckError,
    server_url: &str,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => render_error(url, error, server_url),
        OutputFormat::Html => error_html(error, server_url),
        OutputFormat::Json => json!({
            "url": url,
            "error": error.to_string(),
            "kind": error.kind().as_str(),
        })
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Checks, ResultSource};
    use strum::IntoEnumIterator;

    pub(crate) fn sample_report(class: StatusClass) -> CheckReport {
        CheckReport {
            url: "https://example.com".to_string(),
            hostname: Some("example.com".to_string()),
            risk_score: 10,
            status: class.label().to_string(),
            status_class: class,
            issues: vec![],
            total_issues: 0,
            warnings: vec![],
            confidence: None,
            recommendation: None,
            checks: Checks::default(),
            source: ResultSource::Backend,
        }
    }

    #[test]
    fn test_safe_verdict() {
        let verdict = Verdict::for_class(StatusClass::Safe);
        assert_eq!(verdict.icon, "✅");
        assert_eq!(verdict.header_class, "safe");
        assert_eq!(
            verdict.advice,
            "This site looks safe to visit based on our analysis."
        );
    }

    #[test]
    fn test_critical_verdict_uses_danger_header() {
        let verdict = Verdict::for_class(StatusClass::Critical);
        assert_eq!(verdict.icon, "🚨");
        assert_eq!(verdict.header_class, "danger");
        assert!(verdict.advice.starts_with("DO NOT OPEN THIS LINK!"));
    }

    #[test]
    fn test_header_classes_follow_severity() {
        for class in StatusClass::iter() {
            let header = Verdict::for_class(class).header_class;
            let expected = match class {
                StatusClass::Safe => "safe",
                StatusClass::Caution | StatusClass::Warning => "warning",
                StatusClass::Danger | StatusClass::Critical => "danger",
            };
            assert_eq!(header, expected, "{class}");
        }
    }

    #[test]
    fn test_recommendation_overrides_advice() {
        let mut report = sample_report(StatusClass::Warning);
        assert_eq!(
            advice_for(&report),
            Verdict::for_class(StatusClass::Warning).advice
        );

        report.recommendation = Some("Do not log in here".to_string());
        assert_eq!(advice_for(&report), "Do not log in here");
    }

    #[test]
    fn test_display_hostname_falls_back_to_url() {
        let mut report = sample_report(StatusClass::Safe);
        report.hostname = None;
        report.url = "https://fallback.example/path".to_string();
        assert_eq!(display_hostname(&report), "fallback.example");
    }

    #[test]
    fn test_json_output_is_normalized_report() {
        let report = sample_report(StatusClass::Danger);
        let rendered = render_report_as(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["status_class"], "danger");
        assert_eq!(value["source"], "backend");
        assert_eq!(value["risk_score"], 10);
    }

    #[test]
    fn test_json_error_output() {
        let err = CheckError::Timeout { secs: 15 };
        let rendered = render_error_as(
            "https://example.com",
            &err,
            "https://backend.test",
            OutputFormat::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["kind"], "Request timeout");
        assert_eq!(value["error"], "Request timed out after 15 seconds");
    }
}

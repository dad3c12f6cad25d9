//! HTML fragments for check results.
//!
//! Each section generator is independent and returns an empty string when its
//! section is absent or unsuccessful, so callers can concatenate blindly.

use html_escape::encode_text;

use super::{advice_for, display_hostname, Verdict};
use crate::error_handling::{CheckError, ErrorKind};
use crate::models::{CheckReport, Checks, DomainAge, ResultSource, RiskBand};

const GOOD: &str = "#4caf50";
const WARN: &str = "#ff9800";
const HIGH: &str = "#ff5722";
const BAD: &str = "#f44336";
const UNKNOWN: &str = "Unknown";

fn section_open(icon: &str, title: &str) -> String {
    format!(
        "<div class=\"check-box\">\n<div class=\"check-header\"><span class=\"check-icon\">{icon}</span> <strong>{}</strong></div>\n<div class=\"check-content\">\n",
        encode_text(title)
    )
}

const SECTION_CLOSE: &str = "</div>\n</div>\n";

fn banner(color: &str, text: &str) -> String {
    format!(
        "<div class=\"check-status\" style=\"background: {color};\">{}</div>\n",
        encode_text(text)
    )
}

fn row(label: &str, value: &str, color: Option<&str>) -> String {
    let style = color
        .map(|c| format!(" style=\"color: {c}; font-weight: bold;\""))
        .unwrap_or_default();
    format!(
        "<div class=\"check-item\"><span class=\"check-label\">{}</span> <span class=\"check-value\"{style}>{}</span></div>\n",
        encode_text(label),
        encode_text(value)
    )
}

fn list(class: &str, bullet_color: &str, items: &[String]) -> String {
    let mut html = format!("<ul class=\"{class}\">\n");
    for item in items {
        html.push_str(&format!(
            "<li class=\"issue-item\"><span style=\"color: {bullet_color};\">●</span> {}</li>\n",
            encode_text(item)
        ));
    }
    html.push_str("</ul>\n");
    html
}

fn or_unknown(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(UNKNOWN)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// SSL certificate section.
///
/// Without an `ssl` check, a plain-HTTP URL still gets a "No SSL certificate"
/// warning; an HTTPS URL gets nothing.
pub fn ssl_html(checks: &Checks, url: &str) -> String {
    let Some(ssl) = &checks.ssl else {
        if url.starts_with("https://") {
            return String::new();
        }
        let mut html = section_open("🔓", "SSL Certificate");
        html.push_str(&banner(WARN, "⚠️ No SSL certificate"));
        html.push_str(
            "<p>This site does not use HTTPS. Data sent to it is not encrypted.</p>\n",
        );
        html.push_str(SECTION_CLOSE);
        return html;
    };

    let mut html = section_open("🔒", "SSL Certificate");

    if !ssl.success {
        let message = ssl
            .error
            .as_deref()
            .or(ssl.message.as_deref())
            .unwrap_or("Certificate check failed");
        html.push_str(&banner(BAD, "❌ SSL check failed"));
        html.push_str(&format!("<p>{}</p>\n", encode_text(message)));
        html.push_str(SECTION_CLOSE);
        return html;
    }

    if ssl.is_valid {
        html.push_str(&banner(GOOD, "✅ Valid certificate"));
    } else {
        html.push_str(&banner(BAD, "❌ Invalid certificate"));
    }

    let days = match ssl.days_remaining {
        Some(d) => format!("{d} days"),
        None => UNKNOWN.to_string(),
    };
    let days_color = ssl.days_remaining.map(days_remaining_color);
    let strength_color = if ssl.is_strong() { GOOD } else { WARN };

    html.push_str("<div class=\"check-grid\">\n");
    html.push_str(&row("📝 Issued To:", or_unknown(ssl.issued_to.as_deref()), None));
    html.push_str(&row("🏢 Issuer:", or_unknown(ssl.issuer.as_deref()), None));
    html.push_str(&row("📅 Valid From:", or_unknown(ssl.valid_from.as_deref()), None));
    html.push_str(&row("📅 Valid Until:", or_unknown(ssl.valid_until.as_deref()), None));
    html.push_str(&row("⏰ Days Remaining:", &days, days_color));
    html.push_str(&row("🔐 TLS Version:", or_unknown(ssl.tls_version.as_deref()), None));
    html.push_str(&row("⚡ Cipher Suite:", or_unknown(ssl.cipher_suite.as_deref()), None));
    html.push_str(&row(
        "🛡️ SSL Strength:",
        or_unknown(ssl.ssl_strength.as_deref()),
        Some(strength_color),
    ));
    html.push_str("</div>\n");
    html.push_str(SECTION_CLOSE);
    html
}

fn days_remaining_color(days: i64) -> &'static str {
    use crate::config::{SSL_EXPIRY_CRITICAL_DAYS, SSL_EXPIRY_WARNING_DAYS};
    if days < SSL_EXPIRY_CRITICAL_DAYS {
        BAD
    } else if days < SSL_EXPIRY_WARNING_DAYS {
        WARN
    } else {
        GOOD
    }
}

/// DNS section, only for a successful lookup.
pub fn dns_html(checks: &Checks) -> String {
    let Some(dns) = checks.dns.as_ref().filter(|d| d.success) else {
        return String::new();
    };

    let mut html = section_open("🌐", "DNS Analysis");
    if !dns.issues.is_empty() {
        html.push_str(&banner(
            WARN,
            &format!("⚠️ {} DNS issue(s) found", dns.issues.len()),
        ));
        html.push_str(&list("issues-list", WARN, &dns.issues));
    }

    if let Some(records) = dns.records.as_ref().filter(|r| !r.is_empty()) {
        html.push_str("<div class=\"check-grid\">\n");
        if !records.a.is_empty() {
            html.push_str(&row("📍 IP Address:", &records.a.join(", "), None));
        }
        if !records.mx.is_empty() {
            html.push_str(&row("📧 Mail Server:", &records.mx.join(", "), None));
        }
        if !records.ns.is_empty() {
            html.push_str(&row("🌐 Name Servers:", &records.ns.join(", "), None));
        }
        html.push_str("</div>\n");
    }
    html.push_str(SECTION_CLOSE);
    html
}

/// Domain registration section, only for a successful lookup.
pub fn whois_html(checks: &Checks) -> String {
    let Some(whois) = checks.whois.as_ref().filter(|w| w.success) else {
        return String::new();
    };

    let (icon, color, label) = match whois.age_bucket() {
        DomainAge::VeryNew => ("🚨", BAD, "Very new (high risk)"),
        DomainAge::New => ("⚠️", WARN, "New (suspicious)"),
        DomainAge::RelativelyNew => ("📅", WARN, "Relatively new"),
        DomainAge::Established => ("✅", GOOD, "Established"),
        DomainAge::Unknown => ("❔", WARN, UNKNOWN),
    };
    let age = match whois.age_days {
        Some(days) => format!("{days} days ({label})"),
        None => label.to_string(),
    };

    let mut html = section_open("📅", "Domain Registration");
    html.push_str("<div class=\"check-grid\">\n");
    html.push_str(&row(&format!("{icon} Domain Age:"), &age, Some(color)));
    html.push_str(&row("🏢 Registrar:", or_unknown(whois.registrar.as_deref()), None));
    html.push_str(&row(
        "📅 Created:",
        or_unknown(whois.creation_date.as_deref()),
        None,
    ));
    if let Some(expires) = whois.expiration_date.as_deref().filter(|e| !e.is_empty()) {
        html.push_str(&row("⌛ Expires:", expires, None));
    }
    html.push_str("</div>\n");
    if !whois.issues.is_empty() {
        html.push_str(&list("issues-list", WARN, &whois.issues));
    }
    html.push_str(SECTION_CLOSE);
    html
}

/// Threat-intelligence sections: VirusTotal, IPQualityScore and the RapidAPI
/// phishing verdict (shown only when it flags the URL).
pub fn api_results_html(checks: &Checks) -> String {
    let mut html = String::new();

    if let Some(vt) = checks.virustotal.as_ref().filter(|v| v.success) {
        let malicious = vt.malicious_count();
        let total = vt.total_engines.unwrap_or(0);
        html.push_str(&section_open("🛡️", "VirusTotal"));
        if malicious > 0 {
            html.push_str(&banner(
                BAD,
                &format!("🚨 {malicious} of {total} engines flagged this URL"),
            ));
        } else {
            html.push_str(&banner(GOOD, "✅ No engine flagged this URL"));
        }
        html.push_str("<div class=\"check-grid\">\n");
        html.push_str(&row(
            "🚫 Malicious:",
            &malicious.to_string(),
            Some(if malicious > 0 { BAD } else { GOOD }),
        ));
        html.push_str(&row(
            "⚠️ Suspicious:",
            &vt.suspicious.unwrap_or(0).to_string(),
            Some(WARN),
        ));
        html.push_str(&row(
            "✅ Harmless:",
            &vt.harmless.unwrap_or(0).to_string(),
            Some(GOOD),
        ));
        html.push_str(&row("🔢 Total Engines:", &total.to_string(), None));
        html.push_str("</div>\n");
        html.push_str(SECTION_CLOSE);
    }

    if let Some(ipqs) = checks.ipqualityscore.as_ref().filter(|i| i.success) {
        let (color, label) = match ipqs.band() {
            RiskBand::VeryHigh => (BAD, "Very high risk"),
            RiskBand::High => (HIGH, "High risk"),
            RiskBand::Medium => (WARN, "Medium risk"),
            RiskBand::Low => (GOOD, "Low risk"),
        };
        let flag_color = |flag: bool, on: &'static str| if flag { on } else { GOOD };

        html.push_str(&section_open("📊", "IPQualityScore"));
        html.push_str(&banner(
            color,
            &format!("{label}: {}/100", ipqs.score()),
        ));
        html.push_str("<div class=\"check-grid\">\n");
        html.push_str(&row(
            "🎭 Phishing:",
            yes_no(ipqs.phishing),
            Some(flag_color(ipqs.phishing, BAD)),
        ));
        html.push_str(&row(
            "🦠 Malware:",
            yes_no(ipqs.malware),
            Some(flag_color(ipqs.malware, BAD)),
        ));
        html.push_str(&row(
            "🤔 Suspicious:",
            yes_no(ipqs.suspicious),
            Some(flag_color(ipqs.suspicious, WARN)),
        ));
        html.push_str("</div>\n");
        html.push_str(SECTION_CLOSE);
    }

    let flagged = checks
        .rapidapi_phishing
        .as_ref()
        .filter(|r| r.success)
        .and_then(|r| r.data.as_ref())
        .filter(|d| d.is_phishing);
    if let Some(verdict) = flagged {
        html.push_str(&section_open("🎣", "Phishing Database"));
        html.push_str(&banner(BAD, "🚨 Listed as phishing"));
        if let Some(confidence) = verdict.confidence {
            html.push_str(&row("Confidence:", &format!("{confidence:.0}%"), None));
        }
        if let Some(level) = verdict.risk_level.as_deref() {
            html.push_str(&row("Risk level:", level, Some(BAD)));
        }
        html.push_str(SECTION_CLOSE);
    }

    html
}

/// Google Safe Browsing section, only for a successful lookup.
pub fn safe_browsing_html(checks: &Checks) -> String {
    let Some(gsb) = checks.google_safe_browsing.as_ref().filter(|g| g.success) else {
        return String::new();
    };

    let mut html = section_open("🔍", "Google Safe Browsing");
    if gsb.is_flagged() {
        html.push_str(&banner(BAD, "🚨 Flagged as unsafe"));
        if !gsb.threats.is_empty() {
            html.push_str(&list("issues-list", BAD, &gsb.threats));
        }
    } else {
        html.push_str(&banner(GOOD, "✅ No threats reported"));
    }
    html.push_str(SECTION_CLOSE);
    html
}

/// Page content section, only for a successful fetch.
pub fn content_html(checks: &Checks) -> String {
    let Some(content) = checks.content.as_ref().filter(|c| c.success) else {
        return String::new();
    };

    let mut html = section_open("📄", "Content Analysis");
    html.push_str("<div class=\"check-grid\">\n");
    html.push_str(&row(
        "🔑 Login form:",
        yes_no(content.has_login_form),
        Some(if content.has_login_form { WARN } else { GOOD }),
    ));
    html.push_str(&row(
        "🔒 Password field:",
        yes_no(content.has_password_field),
        Some(if content.has_password_field { WARN } else { GOOD }),
    ));
    if !content.suspicious_keywords.is_empty() {
        html.push_str(&row(
            "🏷️ Suspicious keywords:",
            &content.suspicious_keywords.join(", "),
            Some(WARN),
        ));
    }
    html.push_str("</div>\n");
    if !content.issues.is_empty() {
        html.push_str(&list("issues-list", WARN, &content.issues));
    }
    html.push_str(SECTION_CLOSE);
    html
}

/// Telegram account section, whenever the check is present.
pub fn telegram_html(checks: &Checks) -> String {
    let Some(telegram) = &checks.telegram else {
        return String::new();
    };

    let mut html = section_open("✈️", "Telegram");
    if telegram.is_official {
        html.push_str(&banner(GOOD, "✅ Official Telegram account"));
    } else {
        html.push_str(&banner(BAD, "❌ Unofficial Telegram account"));
    }
    html.push_str("<div class=\"check-grid\">\n");
    html.push_str(&row(
        "👤 Username:",
        or_unknown(telegram.username.as_deref()),
        None,
    ));
    if let Some(status) = telegram.status.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&row("📋 Status:", status, None));
    }
    html.push_str("</div>\n");
    html.push_str(SECTION_CLOSE);
    html
}

/// Issue and warning lists, or a "nothing found" box when both are empty.
pub fn issues_html(issues: &[String], warnings: &[String]) -> String {
    let mut html = String::new();

    if !issues.is_empty() {
        html.push_str("<div class=\"issues\">\n<h3>🚨 Issues found:</h3>\n");
        html.push_str(&list("issues-list", "#ff6b6b", issues));
        html.push_str("</div>\n");
    }

    if !warnings.is_empty() {
        html.push_str(&format!(
            "<div class=\"warnings\">\n<h3 style=\"color: {WARN};\">⚠️ Warnings:</h3>\n"
        ));
        html.push_str(&list("issues-list", WARN, warnings));
        html.push_str("</div>\n");
    }

    if issues.is_empty() && warnings.is_empty() {
        html.push_str(&format!(
            "<div class=\"no-issues\">\n<h3 style=\"color: {GOOD};\">✨ No issues or warnings found!</h3>\n<p>✅ This site looks safe based on our analysis</p>\n</div>\n"
        ));
    }

    html
}

/// Complete result panel for one report.
pub fn result_html(report: &CheckReport) -> String {
    let verdict = Verdict::for_class(report.status_class);
    let tally = report.checks.tally;

    let mut html = format!(
        "<div class=\"result {}\">\n<div class=\"result-header\">\n<div class=\"result-icon\">{}</div>\n<h2>{}</h2>\n<p class=\"advice\">{}</p>\n<div class=\"score-circle\">{}<span>Score</span></div>\n</div>\n",
        verdict.header_class,
        verdict.icon,
        encode_text(&report.status),
        encode_text(advice_for(report)),
        report.risk_score,
    );

    html.push_str(&format!(
        "<div class=\"stats\">\n<div><small>Confidence</small> <strong>{}%</strong></div>\n<div><small>Total Checks</small> <strong>{}</strong></div>\n<div><small>Successful</small> <strong>{}</strong></div>\n</div>\n",
        report.effective_confidence(),
        tally.total,
        tally.successful,
    ));

    html.push_str(&format!(
        "<div class=\"details-box\">\n<strong>🔗 Checked URL:</strong><br/>\n<code>{}</code>\n<div class=\"hostname\">Hostname: {}</div>\n</div>\n",
        encode_text(&report.url),
        encode_text(&display_hostname(report)),
    ));

    match report.source {
        ResultSource::Backend => {}
        ResultSource::Cache => {
            html.push_str("<p class=\"source\">♻️ Result served from cache</p>\n")
        }
        ResultSource::Fallback => html.push_str(&banner(
            WARN,
            "📴 Offline estimate: the backend could not be reached",
        )),
    }

    let checks = &report.checks;
    html.push_str(&ssl_html(checks, &report.url));
    html.push_str(&dns_html(checks));
    html.push_str(&whois_html(checks));
    html.push_str(&api_results_html(checks));
    html.push_str(&safe_browsing_html(checks));
    html.push_str(&content_html(checks));
    html.push_str(&telegram_html(checks));
    html.push_str(&issues_html(&report.issues, &report.warnings));
    html.push_str("</div>\n");
    html
}

/// Error panel with troubleshooting tips.
pub fn error_html(error: &CheckError, server_url: &str) -> String {
    let kind = error.kind();
    let mut html = format!(
        "<div class=\"result danger\">\n<div class=\"result-header\">\n<div class=\"result-icon\">❌</div>\n<h2>{}</h2>\n</div>\n<div class=\"details-box\">\n<strong>Error:</strong> {}\n",
        encode_text(kind.as_str()),
        encode_text(&error.to_string()),
    );
    if kind != ErrorKind::Validation {
        html.push_str(&format!(
            "<div class=\"hostname\">Server: <code>{}</code></div>\n",
            encode_text(server_url)
        ));
    }
    html.push_str("</div>\n<div class=\"troubleshooting\">\n<h3>💡 Troubleshooting:</h3>\n<ul>\n");
    for tip in kind.troubleshooting() {
        html.push_str(&format!("<li>{}</li>\n", encode_text(tip)));
    }
    html.push_str("</ul>\n<p>🔄 Run the command again to retry.</p>\n</div>\n</div>\n");
    html
}

const PAGE_STYLE: &str = "body{font-family:sans-serif;background:#0f1624;color:#e6edf3;max-width:860px;margin:2em auto;padding:0 1em}\
.result{border-radius:10px;padding:1em 1.5em;margin-bottom:2em}\
.result.safe{border:2px solid #4caf50}.result.warning{border:2px solid #ff9800}.result.danger{border:2px solid #f44336}\
.result-header{display:flex;gap:1em;align-items:center;flex-wrap:wrap}.result-icon{font-size:2.5em}\
.score-circle{margin-left:auto;font-size:1.8em;font-weight:bold}.score-circle span{display:block;font-size:.4em;opacity:.7}\
.stats{display:flex;justify-content:space-between;background:rgba(0,0,0,.3);padding:.6em;border-radius:8px}\
.details-box,.check-box{background:rgba(255,255,255,.05);border-radius:8px;padding:.8em;margin-top:1em}\
.check-status{color:#fff;padding:.4em .8em;border-radius:6px;margin:.5em 0}\
.check-label{opacity:.8}.issues-list{list-style:none;padding-left:.5em}";

/// Standalone HTML document around rendered fragments.
pub fn page_html(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>URL Safety Check</title>\n<style>{PAGE_STYLE}</style>\n</head>\n<body>\n<h1>🛡️ URL Safety Check</h1>\n{body}</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ContentCheck, DnsCheck, DnsRecords, IpQualityScoreCheck, RapidApiCheck, RapidApiVerdict,
        SafeBrowsingCheck, SslCheck, StatusClass, TelegramCheck, VirusTotalCheck, WhoisCheck,
    };
    use crate::render::tests::sample_report;

    #[test]
    fn test_missing_checks_render_nothing() {
        let checks = Checks::default();
        assert_eq!(ssl_html(&checks, "https://example.com"), "");
        assert_eq!(dns_html(&checks), "");
        assert_eq!(whois_html(&checks), "");
        assert_eq!(api_results_html(&checks), "");
        assert_eq!(safe_browsing_html(&checks), "");
        assert_eq!(content_html(&checks), "");
        assert_eq!(telegram_html(&checks), "");
    }

    #[test]
    fn test_missing_ssl_on_plain_http_warns() {
        let html = ssl_html(&Checks::default(), "http://example.com");
        assert!(html.contains("No SSL certificate"));
    }

    #[test]
    fn test_ssl_expiry_colors() {
        assert_eq!(days_remaining_color(3), BAD);
        assert_eq!(days_remaining_color(20), WARN);
        assert_eq!(days_remaining_color(200), GOOD);
    }

    #[test]
    fn test_ssl_success_grid() {
        let checks = Checks {
            ssl: Some(SslCheck {
                success: true,
                is_valid: true,
                issuer: Some("Let's Encrypt".to_string()),
                days_remaining: Some(5),
                ssl_strength: Some("strong".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let html = ssl_html(&checks, "https://example.com");
        assert!(html.contains("Valid certificate"));
        assert!(html.contains("5 days"));
        assert!(html.contains(&format!("color: {BAD}")));
        assert!(html.contains("Issued To:</span> <span class=\"check-value\">Unknown"));
    }

    #[test]
    fn test_ssl_failure_shows_error() {
        let checks = Checks {
            ssl: Some(SslCheck {
                success: false,
                error: Some("handshake failed".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let html = ssl_html(&checks, "https://example.com");
        assert!(html.contains("SSL check failed"));
        assert!(html.contains("handshake failed"));
    }

    #[test]
    fn test_backend_strings_are_escaped() {
        let checks = Checks {
            whois: Some(WhoisCheck {
                success: true,
                age_days: Some(3),
                registrar: Some("<script>alert(1)</script>".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let html = whois_html(&checks);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Very new"));
    }

    #[test]
    fn test_unsuccessful_sections_are_skipped() {
        let checks = Checks {
            dns: Some(DnsCheck {
                success: false,
                ..Default::default()
            }),
            whois: Some(WhoisCheck::default()),
            virustotal: Some(VirusTotalCheck::default()),
            ..Default::default()
        };
        assert_eq!(dns_html(&checks), "");
        assert_eq!(whois_html(&checks), "");
        assert_eq!(api_results_html(&checks), "");
    }

    #[test]
    fn test_dns_records_and_issue_banner() {
        let checks = Checks {
            dns: Some(DnsCheck {
                success: true,
                issues: vec!["No MX records".to_string()],
                records: Some(DnsRecords {
                    a: vec!["93.184.216.34".to_string()],
                    ..Default::default()
                }),
            }),
            ..Default::default()
        };
        let html = dns_html(&checks);
        assert!(html.contains("1 DNS issue(s) found"));
        assert!(html.contains("93.184.216.34"));
        assert!(!html.contains("Mail Server"));
    }

    #[test]
    fn test_api_results() {
        let checks = Checks {
            virustotal: Some(VirusTotalCheck {
                success: true,
                malicious: Some(4),
                total_engines: Some(70),
                ..Default::default()
            }),
            ipqualityscore: Some(IpQualityScoreCheck {
                success: true,
                risk_score: Some(85.0),
                phishing: true,
                ..Default::default()
            }),
            rapidapi_phishing: Some(RapidApiCheck {
                success: true,
                data: Some(RapidApiVerdict {
                    is_phishing: false,
                    ..Default::default()
                }),
            }),
            ..Default::default()
        };
        let html = api_results_html(&checks);
        assert!(html.contains("4 of 70 engines flagged this URL"));
        assert!(html.contains("Very high risk: 85/100"));
        assert!(!html.contains("Phishing Database"));
    }

    #[test]
    fn test_safe_browsing_flagged_lists_threats_escaped() {
        let checks = Checks {
            google_safe_browsing: Some(SafeBrowsingCheck {
                success: true,
                is_safe: Some(false),
                threats: vec!["SOCIAL_ENGINEERING".to_string(), "<script>".to_string()],
            }),
            ..Default::default()
        };
        let html = safe_browsing_html(&checks);
        assert!(html.contains("Google Safe Browsing"));
        assert!(html.contains("Flagged as unsafe"));
        assert!(html.contains(BAD));
        assert!(html.contains("SOCIAL_ENGINEERING"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_safe_browsing_clean() {
        let checks = Checks {
            google_safe_browsing: Some(SafeBrowsingCheck {
                success: true,
                is_safe: Some(true),
                threats: vec![],
            }),
            ..Default::default()
        };
        let html = safe_browsing_html(&checks);
        assert!(html.contains("No threats reported"));
        assert!(!html.contains("Flagged as unsafe"));
        assert!(!html.contains("issues-list"));
    }

    #[test]
    fn test_safe_browsing_failed_lookup_renders_nothing() {
        let checks = Checks {
            google_safe_browsing: Some(SafeBrowsingCheck {
                success: false,
                threats: vec!["MALWARE".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(safe_browsing_html(&checks).is_empty());
    }

    #[test]
    fn test_content_credential_fields_and_keywords() {
        let checks = Checks {
            content: Some(ContentCheck {
                success: true,
                has_login_form: true,
                has_password_field: true,
                suspicious_keywords: vec!["verify".to_string(), "<b>urgent</b>".to_string()],
                issues: vec!["Form posts to & external host".to_string()],
            }),
            ..Default::default()
        };
        let html = content_html(&checks);
        assert!(html.contains("Content Analysis"));
        assert!(html.contains("Login form:"));
        assert!(html.contains("Password field:"));
        assert_eq!(html.matches(">Yes</span>").count(), 2);
        assert!(html.contains("verify, &lt;b&gt;urgent&lt;/b&gt;"));
        assert!(html.contains("Form posts to &amp; external host"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_content_clean_page() {
        let checks = Checks {
            content: Some(ContentCheck {
                success: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        let html = content_html(&checks);
        assert_eq!(html.matches(">No</span>").count(), 2);
        assert!(!html.contains("Suspicious keywords"));
        assert!(!html.contains("issues-list"));
        assert!(!html.contains(WARN));
    }

    #[test]
    fn test_telegram_unofficial() {
        let checks = Checks {
            telegram: Some(TelegramCheck {
                is_official: false,
                username: Some("fake_support".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let html = telegram_html(&checks);
        assert!(html.contains("Unofficial Telegram account"));
        assert!(html.contains("fake_support"));
    }

    #[test]
    fn test_issues_html_variants() {
        assert!(issues_html(&[], &[]).contains("No issues or warnings found"));

        let html = issues_html(&["Typosquatting".to_string()], &["New domain".to_string()]);
        assert!(html.contains("Issues found"));
        assert!(html.contains("Typosquatting"));
        assert!(html.contains("Warnings"));
        assert!(!html.contains("No issues or warnings found"));
    }

    #[test]
    fn test_result_html_header_and_stats() {
        let mut report = sample_report(StatusClass::Critical);
        report.risk_score = 92;
        report.confidence = Some(88);
        let html = result_html(&report);
        assert!(html.starts_with("<div class=\"result danger\">"));
        assert!(html.contains("🚨"));
        assert!(html.contains("92<span>Score</span>"));
        assert!(html.contains("<strong>88%</strong>"));
        assert!(html.contains("Hostname: example.com"));
        assert!(html.contains("No issues or warnings found"));
    }

    #[test]
    fn test_fallback_result_is_labeled() {
        let report = sample_report(StatusClass::Caution).with_source(ResultSource::Fallback);
        assert!(result_html(&report).contains("Offline estimate"));
    }

    #[test]
    fn test_error_html_lists_server_and_tips() {
        let err = CheckError::Network("connection refused".to_string());
        let html = error_html(&err, "https://backend.test");
        assert!(html.contains("connection refused"));
        assert!(html.contains("https://backend.test"));
        for tip in ErrorKind::Network.troubleshooting() {
            assert!(html.contains(&*encode_text(tip)));
        }
        assert!(html.contains("Run the command again to retry"));
    }

    #[test]
    fn test_page_wraps_body() {
        let page = page_html("<p>hi</p>\n");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<p>hi</p>"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}

//! Colored terminal rendering.

use colored::*;

use super::{advice_for, display_hostname, Verdict};
use crate::error_handling::{CheckError, ErrorKind};
use crate::models::{CheckReport, Checks, DomainAge, ResultSource, RiskBand};
use crate::utils::sanitize_error_message;

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    out.push_str(&format!("   {:<16} {}\n", label.bold(), value));
}

fn bullets(out: &mut String, items: &[String], color: Color) {
    for item in items {
        out.push_str(&format!(
            "     {} {}\n",
            "•".color(color),
            sanitize_error_message(item)
        ));
    }
}

/// Multi-line summary of a report, omitting absent sections.
pub fn render_report(report: &CheckReport) -> String {
    let verdict = Verdict::for_class(report.status_class);
    let mut out = format!(
        "{} {}  {}\n",
        verdict.icon,
        sanitize_error_message(&report.status)
            .color(verdict.color)
            .bold(),
        format!("[risk {}/100]", report.risk_score).color(verdict.color),
    );
    out.push_str(&format!(
        "   {}\n",
        sanitize_error_message(advice_for(report)).italic()
    ));

    line(&mut out, "URL:", sanitize_error_message(&report.url));
    line(
        &mut out,
        "Hostname:",
        sanitize_error_message(&display_hostname(report)),
    );
    line(
        &mut out,
        "Confidence:",
        format!(
            "{}% ({} of {} checks successful)",
            report.effective_confidence(),
            report.checks.tally.successful,
            report.checks.tally.total
        ),
    );
    match report.source {
        ResultSource::Backend => {}
        ResultSource::Cache => line(&mut out, "Source:", "cache".dimmed()),
        ResultSource::Fallback => line(
            &mut out,
            "Source:",
            "offline estimate (backend unreachable)".yellow(),
        ),
    }

    render_checks(&mut out, &report.checks, &report.url);

    if !report.issues.is_empty() {
        out.push_str(&format!("   {}\n", "Issues:".red().bold()));
        bullets(&mut out, &report.issues, Color::Red);
    }
    if !report.warnings.is_empty() {
        out.push_str(&format!("   {}\n", "Warnings:".yellow().bold()));
        bullets(&mut out, &report.warnings, Color::Yellow);
    }
    if report.issues.is_empty() && report.warnings.is_empty() {
        out.push_str(&format!("   {}\n", "No issues or warnings found".green()));
    }

    out
}

fn render_checks(out: &mut String, checks: &Checks, url: &str) {
    match &checks.ssl {
        Some(ssl) if ssl.success => {
            let validity = if ssl.is_valid {
                "valid".green()
            } else {
                "invalid".red()
            };
            let days = ssl
                .days_remaining
                .map(|d| format!(", {d} days left"))
                .unwrap_or_default();
            let issuer = ssl
                .issuer
                .as_deref()
                .map(|i| format!(" from {}", sanitize_error_message(i)))
                .unwrap_or_default();
            line(out, "SSL:", format!("{validity}{issuer}{days}"));
        }
        Some(ssl) => {
            let message = ssl
                .error
                .as_deref()
                .or(ssl.message.as_deref())
                .unwrap_or("check failed");
            line(out, "SSL:", sanitize_error_message(message).red());
        }
        None if !url.starts_with("https://") => {
            line(out, "SSL:", "no certificate (plain HTTP)".yellow())
        }
        None => {}
    }

    if let Some(dns) = checks.dns.as_ref().filter(|d| d.success) {
        let addresses = dns
            .records
            .as_ref()
            .map(|r| r.a.join(", "))
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| "no A records".to_string());
        line(out, "DNS:", sanitize_error_message(&addresses));
        bullets(out, &dns.issues, Color::Yellow);
    }

    if let Some(whois) = checks.whois.as_ref().filter(|w| w.success) {
        let age = match whois.age_days {
            Some(days) => format!("{days} days old"),
            None => "age unknown".to_string(),
        };
        let age = match whois.age_bucket() {
            DomainAge::VeryNew => age.red(),
            DomainAge::New | DomainAge::RelativelyNew | DomainAge::Unknown => age.yellow(),
            DomainAge::Established => age.green(),
        };
        let registrar = whois.registrar.as_deref().unwrap_or("unknown registrar");
        line(
            out,
            "WHOIS:",
            format!("{age}, {}", sanitize_error_message(registrar)),
        );
        bullets(out, &whois.issues, Color::Yellow);
    }

    if let Some(vt) = checks.virustotal.as_ref().filter(|v| v.success) {
        let summary = format!(
            "{} of {} engines flagged",
            vt.malicious_count(),
            vt.total_engines.unwrap_or(0)
        );
        let summary = if vt.malicious_count() > 0 {
            summary.red()
        } else {
            summary.green()
        };
        line(out, "VirusTotal:", summary);
    }

    if let Some(ipqs) = checks.ipqualityscore.as_ref().filter(|i| i.success) {
        let score = format!("risk {}/100", ipqs.score());
        let score = match ipqs.band() {
            RiskBand::VeryHigh | RiskBand::High => score.red(),
            RiskBand::Medium => score.yellow(),
            RiskBand::Low => score.green(),
        };
        line(out, "IPQualityScore:", score);
    }

    let flagged = checks
        .rapidapi_phishing
        .as_ref()
        .filter(|r| r.success)
        .and_then(|r| r.data.as_ref())
        .filter(|d| d.is_phishing);
    if flagged.is_some() {
        line(out, "Phishing DB:", "listed as phishing".red().bold());
    }

    if let Some(gsb) = checks.google_safe_browsing.as_ref().filter(|g| g.success) {
        if gsb.is_flagged() {
            line(out, "Safe Browsing:", "flagged as unsafe".red());
            bullets(out, &gsb.threats, Color::Red);
        } else {
            line(out, "Safe Browsing:", "no threats reported".green());
        }
    }

    if let Some(content) = checks.content.as_ref().filter(|c| c.success) {
        let mut notes = Vec::new();
        if content.has_login_form {
            notes.push("login form");
        }
        if content.has_password_field {
            notes.push("password field");
        }
        let summary = if notes.is_empty() {
            "no credential fields".green()
        } else {
            notes.join(", ").yellow()
        };
        line(out, "Content:", summary);
        bullets(out, &content.suspicious_keywords, Color::Yellow);
        bullets(out, &content.issues, Color::Yellow);
    }

    if let Some(telegram) = &checks.telegram {
        let who = sanitize_error_message(
            telegram.username.as_deref().unwrap_or("unknown account"),
        );
        let verdict = if telegram.is_official {
            format!("{who} (official)").green()
        } else {
            format!("{who} (unofficial)").red()
        };
        line(out, "Telegram:", verdict);
    }
}

/// Error panel for a failed check.
pub fn render_error(url: &str, error: &CheckError, server_url: &str) -> String {
    let kind = error.kind();
    let mut out = format!(
        "❌ {} {}: {}\n",
        kind.as_str().red().bold(),
        sanitize_error_message(url),
        sanitize_error_message(&error.to_string())
    );
    if kind != ErrorKind::Validation {
        line(&mut out, "Server:", sanitize_error_message(server_url));
    }
    out.push_str(&format!("   {}\n", "Troubleshooting:".bold()));
    for tip in kind.troubleshooting() {
        out.push_str(&format!("     • {tip}\n"));
    }
    out.push_str(&format!(
        "   {}\n",
        "Run the command again to retry.".dimmed()
    ));
    out
}

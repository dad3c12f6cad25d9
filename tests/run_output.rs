//! Tests for the batch run: URL list input, rendered output and exit codes.

mod helpers;

use std::io::Write;

use tempfile::NamedTempFile;
use url_safety_check::{read_url_list, run_check_to, FailOn, OutputFormat};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{config_for, danger_response, full_response};

async fn mount_backend(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/check"))
        .and(body_json(serde_json::json!({"url": "https://example.com"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(full_response("https://example.com")),
        )
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .and(body_json(serde_json::json!({"url": "https://bad.test/login"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(danger_response("https://bad.test/login")),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_read_url_list_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "# phishing candidates").unwrap();
    writeln!(file, "example.com").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  https://bad.test/login  ").unwrap();
    writeln!(file, "#done").unwrap();
    file.flush().unwrap();

    let urls = read_url_list(file.path()).await.expect("Should read list");
    assert_eq!(urls, vec!["example.com", "https://bad.test/login"]);
}

#[tokio::test]
async fn test_read_url_list_missing_file() {
    let err = read_url_list(std::path::Path::new("/nonexistent/urls.txt"))
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to open input file"));
}

#[tokio::test]
async fn test_run_counts_and_json_lines() {
    let server = MockServer::start().await;
    mount_backend(&server).await;

    let config = url_safety_check::Config {
        output: OutputFormat::Json,
        ..config_for(&server)
    };
    let urls = vec![
        "example.com".to_string(),
        "bad.test/login".to_string(),
        "example.com".to_string(),
        "ftp://nope.test".to_string(),
    ];
    let mut out = Vec::new();
    let report = run_check_to(&config, &urls, &mut out).await.unwrap();

    assert_eq!(report.total, 4);
    assert_eq!(report.safe, 2);
    assert_eq!(report.risky, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.from_cache, 1);
    assert_eq!(report.from_fallback, 0);

    assert_eq!(report.exit_code(FailOn::Never), 0);
    assert_eq!(report.exit_code(FailOn::Errors), 1);
    assert_eq!(report.exit_code(FailOn::Danger), 1);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["status_class"], "safe");
    assert_eq!(lines[1]["status_class"], "critical");
    assert_eq!(lines[2]["source"], "cache");
    assert_eq!(lines[3]["kind"], "Invalid input");
}

#[tokio::test]
async fn test_html_output_is_one_page() {
    let server = MockServer::start().await;
    mount_backend(&server).await;

    let config = url_safety_check::Config {
        output: OutputFormat::Html,
        ..config_for(&server)
    };
    let urls = vec!["example.com".to_string(), "bad.test/login".to_string()];
    let mut out = Vec::new();
    run_check_to(&config, &urls, &mut out).await.unwrap();

    let html = String::from_utf8(out).unwrap();
    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert!(html.contains("<div class=\"result safe\">"));
    assert!(html.contains("<div class=\"result danger\">"));
    assert!(html.contains("Valid certificate"));
    assert!(html.contains("Brand impersonation"));
}

#[tokio::test]
async fn test_text_output_and_unreachable_health_probe() {
    let server = MockServer::start().await;
    mount_backend(&server).await;

    // No /health mock: the probe gets a 404 and the run continues
    let config = url_safety_check::Config {
        health_check: true,
        ..config_for(&server)
    };
    let urls = vec!["example.com".to_string()];
    let mut out = Vec::new();
    let report = run_check_to(&config, &urls, &mut out).await.unwrap();
    assert_eq!(report.safe, 1);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("https://example.com"));
    assert!(text.contains("VirusTotal"));
}

#[tokio::test]
async fn test_unusable_server_url_fails_run() {
    let config = url_safety_check::Config {
        server_url: "not a url".to_string(),
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = run_check_to(&config, &["example.com".to_string()], &mut out)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("Invalid server URL"));
}

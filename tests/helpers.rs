// Shared test helpers for backend mocking and configuration.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use url_safety_check::Config;
use wiremock::MockServer;

/// Config pointing at a mock backend, with the health probe off so tests only
/// see the requests they mount.
#[allow(dead_code)] // Used by other test files
pub fn config_for(server: &MockServer) -> Config {
    Config {
        server_url: server.uri(),
        request_timeout_secs: 5,
        health_check: false,
        ..Default::default()
    }
}

/// A full backend answer with every provider section populated.
#[allow(dead_code)] // Used by other test files
pub fn full_response(url: &str) -> Value {
    json!({
        "url": url,
        "hostname": "example.com",
        "risk_score": 12,
        "status": "Safe",
        "status_class": "safe",
        "issues": [],
        "warnings": ["Domain registered less than a year ago"],
        "confidence": 91,
        "checks": {
            "ssl": {
                "success": true,
                "is_valid": true,
                "issued_to": "example.com",
                "issuer": "R3",
                "valid_from": "2024-01-01",
                "valid_until": "2024-04-01",
                "days_remaining": 45,
                "tls_version": "TLSv1.3",
                "cipher_suite": "TLS_AES_256_GCM_SHA384",
                "ssl_strength": "strong"
            },
            "dns": {
                "success": true,
                "issues": [],
                "records": {"A": ["93.184.216.34"], "MX": [], "NS": ["a.iana-servers.net"]}
            },
            "whois": {"success": true, "age_days": 200, "registrar": "Example Registrar"},
            "virustotal": {"success": true, "malicious": 0, "suspicious": 0, "harmless": 68, "total_engines": 70},
            "ipqualityscore": {"success": true, "risk_score": 10, "phishing": false, "malware": false, "suspicious": false},
            "rapidapi_phishing": {"success": false, "error": "quota exceeded"}
        }
    })
}

/// A minimal dangerous verdict.
#[allow(dead_code)] // Used by other test files
pub fn danger_response(url: &str) -> Value {
    json!({
        "url": url,
        "risk_score": 88,
        "status": "Phishing Detected",
        "status_class": "critical",
        "issues": ["Brand impersonation", "Login form on new domain"],
        "warnings": []
    })
}

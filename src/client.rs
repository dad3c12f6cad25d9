//! Backend HTTP client.
//!
//! Wraps the two backend routes this tool uses:
//! - `POST {server}/check` (or `/api/check`) with `{"url": ...}`
//! - `GET {server}/health`
//!
//! Every call is raced against a client-side timer; an expired timer abandons
//! the request and surfaces `CheckError::Timeout`. Nothing is retried here.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::config::{Config, HEALTH_PATH, HEALTH_TIMEOUT};
use crate::error_handling::{
    categorize_reqwest_error, extract_error_message, CheckError, InitializationError,
};
use crate::initialization::init_client;
use crate::models::{CheckReport, HealthStatus};
use crate::utils::sanitize_and_truncate_error_message;

#[derive(Serialize)]
struct CheckRequest<'a> {
    url: &'a str,
}

/// Client for one backend deployment.
#[derive(Clone)]
pub struct BackendClient {
    http: Arc<reqwest::Client>,
    server_url: String,
    check_url: Url,
    health_url: Url,
    timeout: Duration,
}

impl BackendClient {
    /// Builds the HTTP client and resolves endpoint URLs from `config`.
    ///
    /// # Errors
    ///
    /// Fails when the server URL is not an absolute http(s) URL or the HTTP
    /// client cannot be created.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let http = init_client(config)?;
        Self::with_http_client(http, config)
    }

    /// Same as `new`, reusing an existing `reqwest::Client`.
    pub fn with_http_client(
        http: Arc<reqwest::Client>,
        config: &Config,
    ) -> Result<Self, InitializationError> {
        let server_url = config.server_url.trim().trim_end_matches('/').to_string();
        let check_url = endpoint_url(&server_url, config.endpoint.path())?;
        let health_url = endpoint_url(&server_url, HEALTH_PATH)?;

        Ok(BackendClient {
            http,
            server_url,
            check_url,
            health_url,
            timeout: config.request_timeout(),
        })
    }

    /// Base URL, without a trailing slash.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Full URL of the check route.
    pub fn check_endpoint(&self) -> &str {
        self.check_url.as_str()
    }

    /// Submits a normalized URL for analysis.
    ///
    /// # Errors
    ///
    /// - `Timeout` when the request and body read exceed the configured timeout
    /// - `Network` on connection failures
    /// - `Http` on non-2xx responses, with the body's `error`/`message` text
    /// - `Decode` when a 2xx body is not JSON
    pub async fn check(&self, url: &str) -> Result<CheckReport, CheckError> {
        match tokio::time::timeout(self.timeout, self.post_check(url)).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!(
                    "Check request for {} timed out after {:?}",
                    url,
                    self.timeout
                );
                Err(CheckError::Timeout {
                    secs: self.timeout.as_secs(),
                })
            }
        }
    }

    async fn post_check(&self, url: &str) -> Result<CheckReport, CheckError> {
        let timeout_secs = self.timeout.as_secs();
        log::debug!("POST {} for {}", self.check_url, url);

        let response = self
            .http
            .post(self.check_url.clone())
            .json(&CheckRequest { url })
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e, timeout_secs))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(&e, timeout_secs))?;

        if !status.is_success() {
            let message = extract_error_message(status.as_u16(), &body);
            log::debug!("Backend returned {} for {}: {}", status, url, message);
            return Err(CheckError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.trim().chars().take(80).collect();
            CheckError::Decode(format!(
                "expected JSON ({}), got: {}",
                e,
                sanitize_and_truncate_error_message(&preview)
            ))
        })?;

        Ok(CheckReport::from_value(value, url))
    }

    /// Probes `GET /health`.
    ///
    /// Any 2xx counts as healthy; the body is parsed best-effort.
    pub async fn health(&self) -> Result<HealthStatus, CheckError> {
        let timeout = HEALTH_TIMEOUT.min(self.timeout);
        let request = async {
            let response = self
                .http
                .get(self.health_url.clone())
                .send()
                .await
                .map_err(|e| categorize_reqwest_error(&e, timeout.as_secs()))?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if status.is_success() {
                Ok(HealthStatus::from_body(status.as_u16(), &body))
            } else {
                Err(CheckError::Http {
                    status: status.as_u16(),
                    message: extract_error_message(status.as_u16(), &body),
                })
            }
        };

        match tokio::time::timeout(timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(CheckError::Timeout {
                secs: timeout.as_secs(),
            }),
        }
    }
}

fn endpoint_url(server_url: &str, path: &str) -> Result<Url, InitializationError> {
    let invalid =
        |reason: String| InitializationError::ServerUrlError(server_url.to_string(), reason);

    let url = Url::parse(&format!("{server_url}{path}")).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoint;

    fn config(server_url: &str, endpoint: Endpoint) -> Config {
        Config {
            server_url: server_url.to_string(),
            endpoint,
            ..Default::default()
        }
    }

    #[test]
    fn test_endpoint_urls_join_paths() {
        let client = BackendClient::new(&config("https://backend.test/", Endpoint::Check)).unwrap();
        assert_eq!(client.server_url(), "https://backend.test");
        assert_eq!(client.check_endpoint(), "https://backend.test/check");
        assert_eq!(client.health_url.as_str(), "https://backend.test/health");
    }

    #[test]
    fn test_api_endpoint_with_prefix() {
        let client =
            BackendClient::new(&config("http://localhost:8000/v2", Endpoint::ApiCheck)).unwrap();
        assert_eq!(client.check_endpoint(), "http://localhost:8000/v2/api/check");
    }

    #[test]
    fn test_invalid_server_urls_rejected() {
        for bad in ["not a url", "ftp://backend.test", ""] {
            let result = BackendClient::new(&config(bad, Endpoint::Check));
            assert!(
                matches!(result, Err(InitializationError::ServerUrlError(..))),
                "{bad:?} should be rejected"
            );
        }
    }
}

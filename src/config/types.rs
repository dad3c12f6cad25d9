//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    API_CHECK_PATH, CACHE_TTL_SECS, CHECK_PATH, CONNECT_TIMEOUT_SECS, DEFAULT_SERVER_URL,
    DEFAULT_USER_AGENT, REQUEST_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which backend route receives check requests.
///
/// Deployments disagree on the path, so both are supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Endpoint {
    /// `POST /check`
    Check,
    /// `POST /api/check`
    ApiCheck,
}

impl Endpoint {
    /// Path component appended to the server URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Check => CHECK_PATH,
            Endpoint::ApiCheck => API_CHECK_PATH,
        }
    }
}

/// How each check result is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal summary
    Text,
    /// Standalone HTML document
    Html,
    /// Normalized report as JSON (one object per line)
    Json,
}

/// Exit code policy for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the run completes
    Never,
    /// Exit 1 when any check failed (network, HTTP, validation)
    Errors,
    /// Exit 1 when any URL was rated danger/critical, or any check failed
    Danger,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use url_safety_check::{Config, Endpoint};
///
/// let config = Config {
///     server_url: "http://localhost:8000".to_string(),
///     endpoint: Endpoint::ApiCheck,
///     fallback: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL (scheme + host, optional path prefix)
    pub server_url: String,

    /// Backend check route
    pub endpoint: Endpoint,

    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,

    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Result cache lifetime in seconds (0 disables the cache)
    pub cache_ttl_secs: u64,

    /// Use the local heuristic when the backend is unreachable
    pub fallback: bool,

    /// Probe `GET /health` before the first check
    pub health_check: bool,

    /// Output format
    pub output: OutputFormat,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Exit code policy
    pub fail_on: FailOn,
}

impl Config {
    /// Whole-request timeout as a `Duration`, at least one second.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Cache lifetime as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            endpoint: Endpoint::Check,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            cache_ttl_secs: CACHE_TTL_SECS,
            fallback: false,
            health_check: true,
            output: OutputFormat::Text,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fail_on: FailOn::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Check.path(), "/check");
        assert_eq!(Endpoint::ApiCheck.path(), "/api/check");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(
            config.server_url,
            "https://phising-detector-production.up.railway.app"
        );
        assert_eq!(config.endpoint, Endpoint::Check);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert!(!config.fallback);
        assert!(config.health_check);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.fail_on, FailOn::Never);
        assert!(config.user_agent.starts_with("url_safety_check/"));
    }

    #[test]
    fn test_zero_request_timeout_is_raised_to_one_second() {
        let config = Config {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }
}

//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: backend
//! location, timeouts, cache lifetime, input limits and fallback scoring weights.

use std::time::Duration;

/// Default backend base URL.
///
/// Can be overridden with `--server-url` or the `URL_SAFETY_SERVER_URL`
/// environment variable (also read from `.env`).
pub const DEFAULT_SERVER_URL: &str = "https://phising-detector-production.up.railway.app";

/// Backend path for the classic check endpoint.
pub const CHECK_PATH: &str = "/check";
/// Backend path for the namespaced check endpoint.
pub const API_CHECK_PATH: &str = "/api/check";
/// Backend liveness probe path.
pub const HEALTH_PATH: &str = "/health";

// Network operation timeouts
/// Whole-request timeout for a check call, in seconds (send + body)
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
/// TCP connection timeout in seconds
pub const CONNECT_TIMEOUT_SECS: u64 = 5;
/// Health probe timeout in seconds
/// Kept short so a dead backend does not delay the first check
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Lifetime of a cached backend verdict (5 minutes)
pub const CACHE_TTL_SECS: u64 = 5 * 60;

/// Default User-Agent for backend requests.
pub const DEFAULT_USER_AGENT: &str = concat!("url_safety_check/", env!("CARGO_PKG_VERSION"));

// Input limits
/// Maximum URL length (2048 characters), matching common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;
/// Maximum hostname length per RFC 1035
pub const MAX_HOSTNAME_LENGTH: usize = 253;
/// Maximum length of a single DNS label
pub const MAX_LABEL_LENGTH: usize = 63;
/// Pattern matching an explicit scheme prefix (`scheme://`)
pub const URL_SCHEME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://";

/// Scheme followed by a bare colon (`mailto:x`, `http:/x`). A host:port
/// input matches too and is told apart by the digits after the colon.
pub const BARE_SCHEME_PATTERN: &str = r"^([A-Za-z][A-Za-z0-9+.\-]*):([^/?#]*)";

/// Maximum length of a backend error message shown to the user
/// Longer text bodies (e.g. proxy HTML error pages) are truncated
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

// Fallback heuristic weights
/// Starting score of a fallback analysis
pub const FALLBACK_BASE_SCORE: u8 = 30;
/// Added when the URL is not served over HTTPS
pub const FALLBACK_NO_HTTPS_PENALTY: u8 = 25;
/// Added when the URL is longer than `FALLBACK_LONG_URL_THRESHOLD`
pub const FALLBACK_LONG_URL_PENALTY: u8 = 10;
/// URL length above which the long-URL penalty applies
pub const FALLBACK_LONG_URL_THRESHOLD: usize = 100;
/// Confidence reported for fallback verdicts
pub const FALLBACK_CONFIDENCE: u8 = 20;

// Rendering thresholds
/// SSL certificates expiring in fewer days than this are flagged
pub const SSL_EXPIRY_WARNING_DAYS: i64 = 30;
/// SSL certificates expiring in fewer days than this are flagged as urgent
pub const SSL_EXPIRY_CRITICAL_DAYS: i64 = 7;

// HTTP status codes
/// First status code treated as a backend failure eligible for fallback
pub const HTTP_STATUS_SERVER_ERROR_MIN: u16 = 500;

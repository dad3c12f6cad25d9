//! Error type definitions.
//!
//! This module defines the errors raised while validating input, talking to the
//! backend and setting up the application, plus the `ErrorKind` categories used
//! for statistics and troubleshooting text.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::HTTP_STATUS_SERVER_ERROR_MIN;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured backend URL cannot be used.
    #[error("Invalid server URL '{0}': {1}")]
    ServerUrlError(String, String),
}

/// Reasons a user-supplied URL is rejected before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was entered.
    #[error("Please enter a URL first")]
    Empty,

    /// Input exceeds `MAX_URL_LENGTH`.
    #[error("URL is too long ({len} > {max} characters)")]
    TooLong {
        /// Length of the rejected input
        len: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Whitespace inside the URL.
    #[error("URL must not contain whitespace")]
    ContainsWhitespace,

    /// A character that has no business in a URL typed by a user.
    #[error("URL contains a forbidden character: {0:?}")]
    DangerousCharacter(char),

    /// Explicit scheme other than http/https.
    #[error("Unsupported scheme '{0}' (only http:// and https:// are allowed)")]
    UnsupportedScheme(String),

    /// The URL parser rejected the input.
    #[error("Invalid URL: {0}")]
    Malformed(String),

    /// User name or password embedded before the host.
    #[error("URL must not contain a user name or password")]
    ContainsCredentials,

    /// Parsed, but no host component.
    #[error("URL has no host")]
    MissingHost,

    /// Hostname longer than 253 characters.
    #[error("Hostname is too long ({0} characters)")]
    HostnameTooLong(usize),

    /// A single hostname label longer than 63 characters.
    #[error("Hostname label '{0}' is too long")]
    LabelTooLong(String),
}

/// Errors returned by a URL check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Input rejected, no request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend did not answer within the request timeout.
    #[error("Request timed out after {secs} seconds")]
    Timeout {
        /// Timeout that expired
        secs: u64,
    },

    /// Connection-level failure (DNS, refused, TLS, reset).
    #[error("Could not reach the server: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Http {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// A 2xx response whose body is not JSON.
    #[error("Unexpected response from the server: {0}")]
    Decode(String),

    /// Another check is still running on this checker.
    #[error("A check is already in progress")]
    Busy,
}

impl CheckError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Validation(_) => ErrorKind::Validation,
            CheckError::Timeout { .. } => ErrorKind::Timeout,
            CheckError::Network(_) => ErrorKind::Network,
            CheckError::Http { status, .. } if *status >= HTTP_STATUS_SERVER_ERROR_MIN => {
                ErrorKind::ServerError
            }
            CheckError::Http { .. } => ErrorKind::ClientError,
            CheckError::Decode(_) => ErrorKind::Decode,
            CheckError::Busy => ErrorKind::Busy,
        }
    }

    /// True when the backend could not produce a verdict at all
    /// (unreachable, timed out or 5xx), which is when fallback mode applies.
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Timeout | ErrorKind::Network | ErrorKind::ServerError
        )
    }
}

/// Categories of check failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    Validation,
    Timeout,
    Network,
    ClientError, // 4xx
    ServerError, // 5xx
    Decode,
    Busy,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Invalid input",
            ErrorKind::Timeout => "Request timeout",
            ErrorKind::Network => "Connection failed",
            ErrorKind::ClientError => "Request rejected (4xx)",
            ErrorKind::ServerError => "Server error (5xx)",
            ErrorKind::Decode => "Unreadable response",
            ErrorKind::Busy => "Check already running",
        }
    }

    /// Troubleshooting steps shown in the error panel.
    pub fn troubleshooting(&self) -> &'static [&'static str] {
        match self {
            ErrorKind::Validation => &[
                "Use a full address such as https://example.com",
                "Remove spaces and quotes from the URL",
            ],
            ErrorKind::Timeout => &[
                "The backend may be cold-starting; wait a moment and try again",
                "Increase --timeout-seconds for slow deployments",
                "Use --fallback to get a local heuristic while the backend is down",
            ],
            ErrorKind::Network => &[
                "Make sure the backend is deployed and running",
                "Check that --server-url (or URL_SAFETY_SERVER_URL) is correct",
                "Check your network connection or proxy settings",
            ],
            ErrorKind::ClientError => &[
                "Check that --endpoint matches the backend (check or api-check)",
                "The backend rejected this URL; verify it is well formed",
            ],
            ErrorKind::ServerError => &[
                "The backend failed while analyzing the URL; try again later",
                "Use --fallback to get a local heuristic while the backend is down",
            ],
            ErrorKind::Decode => &[
                "The server answered with something other than JSON",
                "Check that --server-url points at the checker backend, not a web page",
            ],
            ErrorKind::Busy => &["Wait for the running check to finish"],
        }
    }
}

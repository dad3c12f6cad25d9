//! Error categorization.
//!
//! Maps transport errors from `reqwest` and failed backend responses onto
//! `CheckError`.

use serde_json::Value;

use super::types::CheckError;

/// Categorizes a `reqwest::Error` raised while sending a request or reading
/// its body.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `timeout_secs` - Configured request timeout, reported on timeouts
pub fn categorize_reqwest_error(error: &reqwest::Error, timeout_secs: u64) -> CheckError {
    if let Some(status) = error.status() {
        return CheckError::Http {
            status: status.as_u16(),
            message: format!("Server error: {}", status.as_u16()),
        };
    }

    if error.is_timeout() {
        CheckError::Timeout { secs: timeout_secs }
    } else if error.is_decode() {
        CheckError::Decode(error.to_string())
    } else if error.is_connect() {
        CheckError::Network(format!("connection failed ({})", root_cause(error)))
    } else {
        CheckError::Network(root_cause(error))
    }
}

/// Extracts a message from a non-2xx response body.
///
/// JSON bodies carrying `error` or `message` win; otherwise the trimmed text
/// body is used; an empty body falls back to `Server error: <status>`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message", "detail"] {
            match map.get(key) {
                Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_string(),
                Some(Value::Object(inner)) => {
                    if let Some(Value::String(s)) = inner.get("message") {
                        return s.trim().to_string();
                    }
                }
                _ => {}
            }
        }
        return format!("Server error: {status}");
    }

    let text = body.trim();
    if text.is_empty() {
        format!("Server error: {status}")
    } else {
        crate::utils::sanitize_and_truncate_error_message(text)
    }
}

/// Walks the source chain to the innermost error message.
fn root_cause(error: &(dyn std::error::Error + 'static)) -> String {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

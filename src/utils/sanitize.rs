//! Utilities for sanitizing text that came from the backend.
//!
//! Removes control characters from error bodies before they reach the terminal
//! and caps their length.

/// Sanitizes a message by removing control characters.
///
/// Control characters (C0, DEL and the C1 range, which includes the 8-bit
/// CSI) can move the cursor or recolor a terminal, so they are stripped from
/// anything the backend sends before display. Tab, newline and carriage
/// return are kept.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Sanitizes and truncates a message to `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Appends a truncation note carrying the original length when the message
/// was cut.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let max = crate::config::MAX_ERROR_MESSAGE_LENGTH;
    let char_count = sanitized.chars().count();

    if char_count > max {
        let truncated: String = sanitized.chars().take(max.saturating_sub(50)).collect();
        format!(
            "{}... (truncated, original length: {} chars)",
            truncated, char_count
        )
    } else {
        sanitized
    }
}

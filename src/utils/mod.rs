//! Utility functions.
//!
//! This module provides:
//! - String sanitization for backend-supplied text
//! - Timing helpers for check durations

mod sanitize;
mod timing;

pub use sanitize::{sanitize_and_truncate_error_message, sanitize_error_message};
pub use timing::duration_to_ms;

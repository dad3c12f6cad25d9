//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, validation, check failures)
//! - Categorization of transport errors and failed backend responses
//! - Per-category failure counters
//!
//! Check failures are grouped into `ErrorKind`s, each carrying the
//! troubleshooting steps shown in the error panel.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, extract_error_message};
pub use stats::CheckStats;
pub use types::{CheckError, ErrorKind, InitializationError, ValidationError};

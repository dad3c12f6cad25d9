//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (backend paths, timeouts, limits)
//! - CLI option types and the library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, Endpoint, FailOn, LogFormat, LogLevel, OutputFormat};

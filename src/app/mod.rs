//! Application layer.
//!
//! This module holds the per-URL check flow and the statistics printed at the
//! end of a run.

mod checker;
mod statistics;

// Re-export public API
pub use checker::{CheckOutcome, Notice, UrlChecker};
pub use statistics::{print_error_statistics, print_run_summary};

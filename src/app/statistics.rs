//! End-of-run statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{CheckStats, ErrorKind};
use crate::CheckRunReport;

/// Logs a one-line summary of the run.
pub fn print_run_summary(counts: &CheckRunReport) {
    info!(
        "✅ Checked {} URL{} ({} safe, {} dangerous, {} failed, {} cached, {} offline) in {:.1}s",
        counts.total,
        if counts.total == 1 { "" } else { "s" },
        counts.safe,
        counts.risky,
        counts.failed,
        counts.from_cache,
        counts.from_fallback,
        counts.elapsed_seconds
    );
}

/// Logs failure counts per category, skipping empty ones.
pub fn print_error_statistics(stats: &CheckStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Failure Counts ({} total):", total);
    for kind in ErrorKind::iter() {
        let count = stats.count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}

//! Check failure statistics.
//!
//! Counts failed checks per `ErrorKind` so a run can print a breakdown at the end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorKind;

/// Per-category failure counters.
///
/// All kinds are initialized to zero on creation. Counters are atomic so a
/// shared checker can record through `&self`.
pub struct CheckStats {
    errors: HashMap<ErrorKind, AtomicUsize>,
}

impl CheckStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for kind in ErrorKind::iter() {
            errors.insert(kind, AtomicUsize::new(0));
        }
        CheckStats { errors }
    }

    /// Increment the counter for `kind`.
    pub fn increment(&self, kind: ErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map",
                kind
            );
        }
    }

    /// Count recorded for `kind`.
    pub fn count(&self, kind: ErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failures across all kinds.
    pub fn total(&self) -> usize {
        ErrorKind::iter().map(|k| self.count(k)).sum()
    }
}

impl Default for CheckStats {
    fn default() -> Self {
        Self::new()
    }
}

//! In-memory cache of backend verdicts.
//!
//! Keyed by normalized URL. Entries live for a fixed TTL (5 minutes by default)
//! so re-checking the same link does not hit the backend again. Fallback
//! verdicts are never stored.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::models::CheckReport;

struct CacheEntry {
    report: CheckReport,
    stored_at: Instant,
}

/// TTL cache shared through `&self`.
pub struct ResultCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResultCache {
    /// Creates a cache; a zero `ttl` disables it.
    pub fn new(ttl: Duration) -> Self {
        ResultCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Returns a copy of a fresh entry. Stale entries are evicted on access.
    pub fn get(&self, url: &str) -> Option<CheckReport> {
        self.get_at(url, Instant::now())
    }

    /// Stores or replaces the verdict for `url`.
    pub fn insert(&self, url: &str, report: CheckReport) {
        self.insert_at(url, report, Instant::now());
    }

    /// Drops every expired entry, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn get_at(&self, url: &str, now: Instant) -> Option<CheckReport> {
        if !self.is_enabled() {
            return None;
        }
        let mut entries = self.lock();
        let fresh = match entries.get(url) {
            Some(entry) => now.saturating_duration_since(entry.stored_at) < self.ttl,
            None => return None,
        };
        if fresh {
            entries.get(url).map(|entry| entry.report.clone())
        } else {
            log::debug!("Cache entry for {} expired", url);
            entries.remove(url);
            None
        }
    }

    fn insert_at(&self, url: &str, report: CheckReport, now: Instant) {
        if !self.is_enabled() {
            return;
        }
        self.lock().insert(
            url.to_string(),
            CacheEntry {
                report,
                stored_at: now,
            },
        );
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| now.saturating_duration_since(entry.stored_at) < self.ttl);
        before - entries.len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

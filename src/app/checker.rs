//! The check flow for a single URL: validate, consult the cache, ask the
//! backend, and degrade to the local heuristic when allowed.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

use crate::cache::ResultCache;
use crate::client::BackendClient;
use crate::config::Config;
use crate::error_handling::{CheckError, CheckStats, InitializationError};
use crate::fallback::fallback_analysis;
use crate::models::{CheckReport, ResultSource, StatusClass};
use crate::utils::duration_to_ms;
use crate::validation::normalize_url;

/// User-facing notification raised by a finished check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Alarm,
    Error,
}

impl Notice {
    /// `Success` for safe verdicts, `Alarm` for danger/critical, none between.
    pub fn for_report(report: &CheckReport) -> Option<Notice> {
        match report.status_class {
            StatusClass::Safe => Some(Notice::Success),
            StatusClass::Danger | StatusClass::Critical => Some(Notice::Alarm),
            StatusClass::Caution | StatusClass::Warning => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Success => "✅ Site detected as safe!",
            Notice::Alarm => "🚨 Dangerous site detected!",
            Notice::Error => "❌ The check could not be completed",
        }
    }
}

/// A finished check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub report: CheckReport,
    pub notice: Option<Notice>,
}

impl CheckOutcome {
    fn new(report: CheckReport) -> Self {
        let notice = Notice::for_report(&report);
        CheckOutcome { report, notice }
    }
}

/// Clears the in-flight flag however the check ends, including cancellation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs checks against one backend, one at a time.
pub struct UrlChecker {
    client: BackendClient,
    cache: ResultCache,
    fallback_enabled: bool,
    in_flight: AtomicBool,
    stats: CheckStats,
}

impl UrlChecker {
    /// Builds a checker (HTTP client, cache) from `config`.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = BackendClient::new(config)?;
        Ok(Self::with_client(
            client,
            ResultCache::new(config.cache_ttl()),
            config.fallback,
        ))
    }

    pub fn with_client(client: BackendClient, cache: ResultCache, fallback_enabled: bool) -> Self {
        UrlChecker {
            client,
            cache,
            fallback_enabled,
            in_flight: AtomicBool::new(false),
            stats: CheckStats::new(),
        }
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Failure counters for this checker.
    pub fn stats(&self) -> &CheckStats {
        &self.stats
    }

    /// True while a check is running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Checks one user-supplied URL.
    ///
    /// # Errors
    ///
    /// - `Validation` for unusable input; nothing is sent
    /// - `Busy` when another check on this checker has not finished
    /// - backend errors, unless fallback is enabled and the backend is
    ///   unreachable, timed out or answered 5xx
    pub async fn check(&self, raw: &str) -> Result<CheckOutcome, CheckError> {
        let result = self.check_inner(raw).await;
        if let Err(e) = &result {
            self.stats.increment(e.kind());
        }
        result
    }

    async fn check_inner(&self, raw: &str) -> Result<CheckOutcome, CheckError> {
        let url = normalize_url(raw)?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(CheckError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        if let Some(report) = self.cache.get(&url) {
            debug!("Cache hit for {}", url);
            return Ok(CheckOutcome::new(report.with_source(ResultSource::Cache)));
        }

        let started = std::time::Instant::now();
        match self.client.check(&url).await {
            Ok(report) => {
                info!(
                    "{} -> {} (score {}, {} ms)",
                    url,
                    report.status_class,
                    report.risk_score,
                    duration_to_ms(started.elapsed())
                );
                let purged = self.cache.purge_expired();
                if purged > 0 {
                    debug!("Purged {} expired cache entries", purged);
                }
                self.cache.insert(&url, report.clone());
                Ok(CheckOutcome::new(report))
            }
            Err(e) if self.fallback_enabled && e.is_backend_unavailable() => {
                warn!(
                    "Backend unavailable for {} ({}), using offline estimate",
                    url, e
                );
                self.stats.increment(e.kind());
                Ok(CheckOutcome::new(fallback_analysis(&url)))
            }
            Err(e) => {
                warn!("Check failed for {}: {}", url, e);
                Err(e)
            }
        }
    }
}

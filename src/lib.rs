//! url_safety_check library: phishing and URL safety checks against a remote
//! analysis backend
//!
//! URLs are validated and normalized locally, then submitted to the backend,
//! which runs the actual detectors (SSL, DNS, WHOIS, threat-intelligence
//! feeds, content analysis). Responses are normalized into a typed
//! `CheckReport` and rendered as terminal text, HTML or JSON.
//!
//! # Example
//!
//! ```no_run
//! use url_safety_check::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     server_url: "http://localhost:8000".to_string(),
//!     fallback: true,
//!     ..Default::default()
//! };
//!
//! let report = run_check(config, vec!["example.com".to_string()]).await?;
//! println!("{} checked, {} dangerous, {} failed",
//!          report.total, report.risky, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
mod cache;
mod client;
pub mod config;
mod error_handling;
mod fallback;
pub mod initialization;
pub mod models;
pub mod render;
mod utils;
pub mod validation;

// Re-export public API
pub use app::{CheckOutcome, Notice, UrlChecker};
pub use cache::ResultCache;
pub use client::BackendClient;
pub use config::{Config, Endpoint, FailOn, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{CheckError, CheckStats, ErrorKind, InitializationError, ValidationError};
pub use fallback::fallback_analysis;
pub use models::{CheckReport, ResultSource, StatusClass};
pub use run::{read_url_list, run_check, run_check_to, CheckRunReport};

// Internal run module (drives a batch of checks)
mod run {
    use std::io::Write;
    use std::path::Path;

    use anyhow::{Context, Result};
    use log::{error, info, warn};
    use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

    use crate::app::{print_error_statistics, print_run_summary, Notice, UrlChecker};
    use crate::config::{Config, FailOn, OutputFormat};
    use crate::error_handling::CheckError;
    use crate::models::{ResultSource, StatusClass};
    use crate::render::{page_html, render_error_as, render_report_as};

    /// Results of a check run.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct CheckRunReport {
        /// URLs submitted
        pub total: usize,
        /// Rated safe
        pub safe: usize,
        /// Rated danger or critical
        pub risky: usize,
        /// Checks that produced no report
        pub failed: usize,
        /// Reports served from the cache
        pub from_cache: usize,
        /// Offline estimates used because the backend was unavailable
        pub from_fallback: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl CheckRunReport {
        /// Process exit code for this run under `fail_on`.
        pub fn exit_code(&self, fail_on: FailOn) -> i32 {
            let failing = match fail_on {
                FailOn::Never => false,
                FailOn::Errors => self.failed > 0,
                FailOn::Danger => self.failed > 0 || self.risky > 0,
            };
            i32::from(failing)
        }
    }

    /// Checks `urls` in order and writes each result to stdout.
    ///
    /// The health probe (when enabled) is informational only; an unreachable
    /// backend is logged and the checks still run.
    ///
    /// # Errors
    ///
    /// Fails when the server URL or HTTP client is unusable, or stdout cannot be
    /// written. Individual check failures are counted, not returned.
    pub async fn run_check(config: Config, urls: Vec<String>) -> Result<CheckRunReport> {
        let mut stdout = std::io::stdout();
        run_check_to(&config, &urls, &mut stdout).await
    }

    /// Same as `run_check`, writing results to `out`.
    pub async fn run_check_to<W: Write + Send>(
        config: &Config,
        urls: &[String],
        out: &mut W,
    ) -> Result<CheckRunReport> {
        let checker = UrlChecker::new(config).context("Failed to initialize backend client")?;
        let server_url = checker.client().server_url().to_string();
        info!("📡 Backend: {}", server_url);

        if config.health_check {
            probe_health(&checker).await;
        }

        let start_time = std::time::Instant::now();
        let mut report = CheckRunReport {
            total: urls.len(),
            ..Default::default()
        };
        let mut html_body = String::new();

        for raw in urls {
            let rendered = match checker.check(raw).await {
                Ok(outcome) => {
                    let r = &outcome.report;
                    match r.status_class {
                        StatusClass::Safe => report.safe += 1,
                        class if class.is_risky() => report.risky += 1,
                        _ => {}
                    }
                    match r.source {
                        ResultSource::Cache => report.from_cache += 1,
                        ResultSource::Fallback => report.from_fallback += 1,
                        ResultSource::Backend => {}
                    }
                    match outcome.notice {
                        Some(Notice::Alarm) => warn!("{} {}", Notice::Alarm.message(), r.url),
                        Some(notice) => info!("{} {}", notice.message(), r.url),
                        None => {}
                    }
                    render_report_as(r, config.output)
                        .context("Failed to serialize check report")?
                }
                Err(e) => {
                    report.failed += 1;
                    error!("{} ({}): {}", Notice::Error.message(), raw, e);
                    render_error_as(raw, &e, &server_url, config.output)
                }
            };

            match config.output {
                OutputFormat::Html => html_body.push_str(&rendered),
                OutputFormat::Text | OutputFormat::Json => {
                    writeln!(out, "{rendered}").context("Failed to write result")?
                }
            }
        }

        if config.output == OutputFormat::Html {
            write!(out, "{}", page_html(&html_body)).context("Failed to write HTML page")?;
        }
        out.flush().context("Failed to flush output")?;

        report.elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_error_statistics(checker.stats());
        print_run_summary(&report);
        Ok(report)
    }

    async fn probe_health(checker: &UrlChecker) {
        let server_url = checker.client().server_url();
        match checker.client().health().await {
            Ok(health) => {
                info!("✅ Server connected ({})", server_url);
                if let Some(version) = &health.version {
                    info!("Backend version: {}", version);
                }
                if let Some(api_status) = &health.api_status {
                    info!("📊 API status: {}", api_status);
                }
            }
            Err(CheckError::Http { status, .. }) => {
                warn!("⚠️ Server responded with an error: HTTP {}", status);
            }
            Err(e) => {
                warn!("⚠️ Cannot reach the server: {}", e);
                warn!("💡 Make sure the backend is deployed and running");
                warn!("🔧 Server URL: {}", server_url);
            }
        }
    }

    /// Reads URLs from a file (or stdin for `-`), one per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened or read.
    pub async fn read_url_list(path: &Path) -> Result<Vec<String>> {
        if path.as_os_str() == "-" {
            info!("Reading URLs from stdin");
            return read_lines(tokio::io::stdin()).await;
        }
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        read_lines(file).await
    }

    async fn read_lines<R: AsyncRead + Unpin>(reader: R) -> Result<Vec<String>> {
        let mut lines = BufReader::new(reader).lines();
        let mut urls = Vec::new();
        while let Some(line) = lines.next_line().await.context("Failed to read URL list")? {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                urls.push(trimmed.to_string());
            }
        }
        Ok(urls)
    }

}

//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for backend calls.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Connect timeout and whole-request timeout from config
/// - Rustls TLS backend (no native TLS)
///
/// The request timeout set here is a backstop; the check call also races
/// against its own timer so body reads are covered too.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.request_timeout())
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(config.user_agent.clone())
        .use_rustls_tls()
        .build()?;
    Ok(Arc::new(client))
}

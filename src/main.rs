//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_safety_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use url_safety_check::config::{CACHE_TTL_SECS, DEFAULT_SERVER_URL, REQUEST_TIMEOUT_SECS};
use url_safety_check::initialization::init_logger_with;
use url_safety_check::{
    read_url_list, run_check, BackendClient, Config, Endpoint, FailOn, LogFormat, LogLevel,
    OutputFormat,
};

/// Check links for phishing and other risks using a remote analysis backend.
#[derive(Debug, Parser)]
#[command(name = "url_safety_check", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check one or more URLs
    Check(CheckArgs),
    /// Probe the backend's health endpoint
    Health(HealthArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// URLs to check (scheme optional, https:// is assumed)
    urls: Vec<String>,

    /// File with one URL per line ("-" for stdin); blank lines and # comments are skipped
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, env = "URL_SAFETY_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// Backend check route
    #[arg(long, value_enum, default_value_t = Endpoint::Check)]
    endpoint: Endpoint,

    /// Request timeout in seconds
    #[arg(
        long,
        default_value_t = REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_seconds: u64,

    /// Cache lifetime in seconds (0 disables the cache)
    #[arg(long, default_value_t = CACHE_TTL_SECS)]
    cache_ttl_seconds: u64,

    /// Use a local heuristic when the backend is unreachable
    #[arg(long)]
    fallback: bool,

    /// Skip the health probe before checking
    #[arg(long)]
    no_health_check: bool,

    /// Output format for results on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// When to exit with status 1
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    fail_on: FailOn,
}

#[derive(Debug, Args)]
struct HealthArgs {
    /// Backend base URL
    #[arg(long, env = "URL_SAFETY_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl CheckArgs {
    fn to_config(&self) -> Config {
        Config {
            server_url: self.server_url.clone(),
            endpoint: self.endpoint,
            request_timeout_secs: self.timeout_seconds,
            cache_ttl_secs: self.cache_ttl_seconds,
            fallback: self.fallback,
            health_check: !self.no_health_check,
            output: self.output,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            fail_on: self.fail_on,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => {
            let config = args.to_config();
            init_logger_with(config.log_level.clone().into(), config.log_format.clone())
                .context("Failed to initialize logger")?;

            match check(args, config).await {
                Ok(code) => process::exit(code),
                Err(e) => {
                    eprintln!("url_safety_check error: {:#}", e);
                    process::exit(1);
                }
            }
        }
        Command::Health(args) => {
            init_logger_with(args.log_level.clone().into(), LogFormat::Plain)
                .context("Failed to initialize logger")?;

            if let Err(e) = health(&args).await {
                eprintln!("url_safety_check error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
    }
}

async fn check(args: CheckArgs, config: Config) -> Result<i32> {
    let mut urls = args.urls;
    if let Some(path) = &args.file {
        urls.extend(read_url_list(path).await?);
    }
    if urls.is_empty() {
        bail!("no URLs given; pass them as arguments or with --file");
    }

    let fail_on = config.fail_on;
    let report = run_check(config, urls).await?;
    Ok(report.exit_code(fail_on))
}

async fn health(args: &HealthArgs) -> Result<()> {
    let config = Config {
        server_url: args.server_url.clone(),
        ..Default::default()
    };
    let client = BackendClient::new(&config).context("Failed to initialize backend client")?;
    let status = client
        .health()
        .await
        .with_context(|| format!("Backend at {} is not healthy", client.server_url()))?;

    println!(
        "✅ {} is up (HTTP {}{})",
        client.server_url(),
        status.http_status,
        status
            .status
            .as_deref()
            .map(|s| format!(", status: {s}"))
            .unwrap_or_default()
    );
    if let Some(version) = &status.version {
        println!("   version: {version}");
    }
    if let Some(api_status) = &status.api_status {
        println!("   api status: {api_status}");
    }
    Ok(())
}

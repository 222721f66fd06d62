//! Application configuration loaded from environment variables.
//!
//! - `ORDERDESK_API_URL`: backend base URL
//! - `ORDERDESK_POLL_INTERVAL_MS`: how often the order list is refreshed
//! - `ORDERDESK_CA_FILE`: optional PEM bundle with extra trusted roots
//! - `ORDERDESK_LOG_FILE`: where diagnostics are written
//!
//! Every variable is optional; empty values are treated as unset.

use std::path::PathBuf;
use std::time::Duration;

/// Default backend the admin page talks to.
const DEFAULT_API_URL: &str = "https://appresbackend.onrender.com";

/// Default poll interval in milliseconds.
const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

/// Default diagnostic log file.
const DEFAULT_LOG_FILE: &str = "orderdesk.log";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub log_file: PathBuf,
}

/// Backend connection settings.
#[derive(Debug)]
pub struct BackendConfig {
    pub api_url: String,
    pub poll_interval: Duration,
    pub ca_file: Option<PathBuf>,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`OrderDeskError::Config`](crate::OrderDeskError::Config) if
/// `ORDERDESK_POLL_INTERVAL_MS` is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_url = non_empty_var("ORDERDESK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let poll_interval_ms = match non_empty_var("ORDERDESK_POLL_INTERVAL_MS") {
        Some(raw) => parse_interval(&raw)?,
        None => DEFAULT_POLL_INTERVAL_MS,
    };

    let ca_file = non_empty_var("ORDERDESK_CA_FILE").map(PathBuf::from);
    let log_file = non_empty_var("ORDERDESK_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    Ok(AppConfig {
        backend: BackendConfig {
            api_url,
            poll_interval: Duration::from_millis(poll_interval_ms),
            ca_file,
        },
        log_file,
    })
}

fn parse_interval(raw: &str) -> crate::Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(crate::OrderDeskError::Config(format!(
            "ORDERDESK_POLL_INTERVAL_MS must be a positive integer, got {raw:?}"
        ))),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

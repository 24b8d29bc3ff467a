//! Tracing subscriber setup shared by both binaries.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global `tracing` subscriber.
///
/// `log_level` is an `EnvFilter` directive (`info`, `url_shortener_client=debug`, ...);
/// an unparseable directive falls back to `info`. `log_format` selects the
/// human-readable or the JSON formatter.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    init_with(&config.log_level, &config.log_format)
}

/// Same as [`init`] without a full [`Config`], for early CLI startup.
pub fn init_with(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

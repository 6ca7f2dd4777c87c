//! Logging setup.
//!
//! Application code only emits `tracing` events; the subscriber that formats
//! and filters them is installed once here, at startup.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` directives take precedence over `log_level`. `log_format`
/// selects human-readable (`text`) or structured JSON (`json`) output.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive or a
/// global subscriber is already installed.
pub fn init_tracing(log_level: &str, log_format: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if log_format == "json" {
        builder
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
    } else {
        builder.with_target(false).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

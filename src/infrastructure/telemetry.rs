//! Tracing subscriber setup and metric descriptions.

use std::sync::Once;

use anyhow::{Result, anyhow};
use metrics::{Unit, describe_counter};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Installs the global tracing subscriber using the provided configuration.
///
/// `RUST_LOG` takes precedence over the configured log level. The formatter
/// is chosen by `LOG_FORMAT` (`text` or `json`).
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init(config: &Config) -> Result<()> {
    describe_metrics();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let result = if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

/// Registers metric descriptions once per process.
///
/// Recording is a no-op until a metrics recorder is installed, so describing
/// up front is safe regardless of deployment.
fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            "engagement_reads_total",
            Unit::Count,
            "Total number of counter reads served, labeled by counter name."
        );
        describe_counter!(
            "engagement_increments_total",
            Unit::Count,
            "Total number of counter increments recorded, labeled by counter name."
        );
    });
}

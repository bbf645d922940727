//! Logging initialization
//!
//! Installs a `tracing-subscriber` fmt subscriber driven by [`LoggingConfig`].
//! `RUST_LOG` takes precedence over the configured level so individual
//! modules can be turned up without editing the config file.

use crate::config::LoggingConfig;
use crate::utils::error::{PermsetError, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter for the given config, honouring `RUST_LOG` when set
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize the global subscriber
///
/// Logs go to stderr so command output on stdout stays machine readable.
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config);

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| PermsetError::config(format!("Failed to initialize logging: {}", e)))
}

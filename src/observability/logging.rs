//! # Structured Logging
//!
//! Installs a global `tracing` subscriber configured from [`LoggingConfig`].
//! `RUST_LOG` takes precedence over the configured level when it is set.

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::LoggingConfig;
use crate::errors::{BootconfError, Result};

/// Build the filter, preferring `RUST_LOG` over `config.level`
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    config.level.parse::<Level>().map_err(|_| {
        BootconfError::invalid_argument(format!("Invalid log level '{}'", config.level))
    })?;
    EnvFilter::try_new(&config.level).map_err(|e| {
        BootconfError::invalid_argument(format!("Invalid log level '{}': {}", config.level, e))
    })
}

/// Install the global subscriber
///
/// A subscriber that is already installed (e.g. by a test harness) is kept.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let installed = if config.json {
        tracing::subscriber::set_global_default(
            FmtSubscriber::builder().with_env_filter(filter).json().finish(),
        )
    } else {
        tracing::subscriber::set_global_default(
            FmtSubscriber::builder().with_env_filter(filter).finish(),
        )
    };

    if installed.is_err() {
        // Subscriber already set elsewhere; ignore.
    }
    Ok(())
}

//! # Telemetry
//!
//! `tracing` subscriber setup for the binary.
//!
//! `RUST_LOG` wins over the configured level when set.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` if set, otherwise `settings.level`.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` for an unparseable directive.
pub fn env_filter(settings: &LoggingSettings) -> ApplicationResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| ApplicationError::configuration(format!("logging.level: {e}")))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the filter is invalid or a
/// subscriber is already installed.
pub fn init_tracing(settings: &LoggingSettings) -> ApplicationResult<()> {
    let filter = env_filter(settings)?;
    let installed = if settings.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    };
    installed.map_err(|e| ApplicationError::configuration(format!("tracing: {e}")))
}

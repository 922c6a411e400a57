//! Tracing subscriber installation.
//!
//! The library only emits `tracing` events; a host calls [`init_tracing`]
//! once at startup to decide where they go.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Installs a global `fmt` subscriber filtered by `config.log_level`.
///
/// # Errors
///
/// - `InvalidFilter` if the directive does not parse
/// - `AlreadyInitialized` if a global subscriber was installed earlier
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|_| TelemetryError::AlreadyInitialized)
}

//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Reply delay exceeds maximum allowed ({max_ms} ms)")]
    ReplyDelayTooLong { max_ms: u64 },

    #[error("Event channel capacity must be between 1 and {max}")]
    InvalidEventCapacity { max: usize },

    #[error("Log level directive cannot be empty")]
    EmptyLogLevel,
}

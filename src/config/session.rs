//! Session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest simulated client "typing" delay accepted.
pub const MAX_REPLY_DELAY_MS: u64 = 60_000;

/// Largest event channel buffer accepted.
pub const MAX_EVENT_CAPACITY: usize = 4096;

/// Session controller configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Delay before the client's reply appears, in milliseconds
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Buffer size of the session event broadcast channel
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl SessionConfig {
    /// Reply delay as a `Duration`
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Returns a copy with a different reply delay
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(ValidationError::ReplyDelayTooLong {
                max_ms: MAX_REPLY_DELAY_MS,
            });
        }
        if self.event_capacity == 0 || self.event_capacity > MAX_EVENT_CAPACITY {
            return Err(ValidationError::InvalidEventCapacity {
                max: MAX_EVENT_CAPACITY,
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            event_capacity: default_event_capacity(),
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    1500
}

fn default_event_capacity() -> usize {
    64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.reply_delay_ms, 1500);
        assert_eq!(config.reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.event_capacity, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_delay_is_valid() {
        let config = SessionConfig::default().with_reply_delay(Duration::ZERO);
        assert_eq!(config.reply_delay_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let config = SessionConfig {
            reply_delay_ms: MAX_REPLY_DELAY_MS + 1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::ReplyDelayTooLong {
                max_ms: MAX_REPLY_DELAY_MS
            })
        );
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = SessionConfig {
            event_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidEventCapacity { .. })
        ));
    }
}

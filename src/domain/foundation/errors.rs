//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lookup errors
    UnknownScenario,

    // Input errors
    EmptyInput,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::UnknownScenario => "UNKNOWN_SCENARIO",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
        };
        write!(f, "{}", s)
    }
}

/// Errors surfaced by the trainer engine.
///
/// The rule evaluators themselves are total over any string input; only
/// scenario lookup and trainee submission can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainerError {
    /// The requested scenario id is not part of the fixed catalog.
    #[error("Unknown scenario '{id}'")]
    UnknownScenario { id: String },

    /// The trainee submitted blank or whitespace-only text.
    #[error("Trainee response cannot be empty")]
    EmptyInput,
}

impl TrainerError {
    /// Creates an unknown scenario error.
    pub fn unknown_scenario(id: impl Into<String>) -> Self {
        TrainerError::UnknownScenario { id: id.into() }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TrainerError::UnknownScenario { .. } => ErrorCode::UnknownScenario,
            TrainerError::EmptyInput => ErrorCode::EmptyInput,
        }
    }

    /// Returns true if the caller can simply re-prompt and try again.
    ///
    /// An empty submission leaves the session untouched, whereas an unknown
    /// scenario means the caller passed an id outside the catalog.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TrainerError::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scenario_displays_id() {
        let err = TrainerError::unknown_scenario("rust");
        assert_eq!(err.to_string(), "Unknown scenario 'rust'");
        assert_eq!(err.code(), ErrorCode::UnknownScenario);
    }

    #[test]
    fn empty_input_is_recoverable() {
        assert!(TrainerError::EmptyInput.is_recoverable());
        assert!(!TrainerError::unknown_scenario("x").is_recoverable());
    }

    #[test]
    fn error_codes_display_screaming_snake_case() {
        assert_eq!(ErrorCode::UnknownScenario.to_string(), "UNKNOWN_SCENARIO");
        assert_eq!(ErrorCode::EmptyInput.to_string(), "EMPTY_INPUT");
    }
}

//! Conversation stage.
//!
//! A coarse measure of how far a conversation has progressed. It is derived
//! from the number of trainee turns and is tracked for inspection, but no
//! response rule currently branches on it.

use serde::{Deserialize, Serialize};

/// Number of earlier trainee turns after which a conversation counts as
/// past its opening.
pub const INITIAL_STAGE_MAX_PRIOR_TURNS: usize = 4;

/// How far a conversation has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    /// Opening exchanges.
    #[default]
    Initial,

    /// Past the opening exchanges.
    Middle,

    /// Closing phase. Reserved: the derivation never produces it today.
    Late,
}

impl ConversationStage {
    /// Derives the stage from the number of trainee turns recorded before
    /// the current one.
    pub fn from_prior_turns(prior_turns: usize) -> Self {
        if prior_turns > INITIAL_STAGE_MAX_PRIOR_TURNS {
            Self::Middle
        } else {
            Self::Initial
        }
    }

    /// Returns a short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Middle => "middle",
            Self::Late => "late",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stage_is_initial() {
        assert_eq!(ConversationStage::default(), ConversationStage::Initial);
    }

    #[test]
    fn up_to_four_prior_turns_is_initial() {
        for n in 0..=4 {
            assert_eq!(ConversationStage::from_prior_turns(n), ConversationStage::Initial);
        }
    }

    #[test]
    fn five_or_more_prior_turns_is_middle() {
        assert_eq!(ConversationStage::from_prior_turns(5), ConversationStage::Middle);
        assert_eq!(ConversationStage::from_prior_turns(50), ConversationStage::Middle);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&ConversationStage::Middle).unwrap();
        assert_eq!(json, "\"middle\"");
    }
}

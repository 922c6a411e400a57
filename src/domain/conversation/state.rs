//! Per-session conversation state.
//!
//! Tracks which scenario is running, every trainee utterance so far and the
//! derived stage. Owned by a single session controller and reset wholesale
//! when a scenario is (re)started.

use serde::Serialize;

use super::stage::ConversationStage;
use crate::domain::scenario::ScenarioId;

/// Mutable state of one scenario run.
///
/// # Invariants
///
/// - `prior_trainee_utterances` is append-only for the lifetime of a run
/// - `stage` is only ever derived from the utterance count, never set directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationState {
    scenario: ScenarioId,
    stage: ConversationStage,
    prior_trainee_utterances: Vec<String>,
}

impl ConversationState {
    /// Creates fresh state for a scenario.
    pub fn new(scenario: ScenarioId) -> Self {
        Self {
            scenario,
            stage: ConversationStage::Initial,
            prior_trainee_utterances: Vec::new(),
        }
    }

    /// Records a trainee turn and recomputes the stage.
    ///
    /// The stage reflects the turn count before this utterance is added.
    pub fn record_trainee_turn(&mut self, text: impl Into<String>) {
        self.stage = ConversationStage::from_prior_turns(self.prior_trainee_utterances.len());
        self.prior_trainee_utterances.push(text.into());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    pub fn stage(&self) -> ConversationStage {
        self.stage
    }

    pub fn prior_trainee_utterances(&self) -> &[String] {
        &self.prior_trainee_utterances
    }

    /// Number of trainee turns recorded so far.
    pub fn turn_count(&self) -> usize {
        self.prior_trainee_utterances.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_initial_and_empty() {
        let state = ConversationState::new(ScenarioId::Python);
        assert_eq!(state.scenario(), ScenarioId::Python);
        assert_eq!(state.stage(), ConversationStage::Initial);
        assert_eq!(state.turn_count(), 0);
    }

    #[test]
    fn records_utterances_in_order() {
        let mut state = ConversationState::new(ScenarioId::React);
        state.record_trainee_turn("first");
        state.record_trainee_turn("second");
        assert_eq!(state.prior_trainee_utterances(), ["first", "second"]);
    }

    #[test]
    fn stage_moves_to_middle_on_sixth_turn() {
        let mut state = ConversationState::new(ScenarioId::React);
        for i in 0..5 {
            state.record_trainee_turn(format!("turn {i}"));
            assert_eq!(state.stage(), ConversationStage::Initial);
        }
        state.record_trainee_turn("turn 5");
        assert_eq!(state.stage(), ConversationStage::Middle);
    }

    #[test]
    fn stage_never_reaches_late() {
        let mut state = ConversationState::new(ScenarioId::React);
        for i in 0..100 {
            state.record_trainee_turn(format!("turn {i}"));
        }
        assert_ne!(state.stage(), ConversationStage::Late);
    }
}

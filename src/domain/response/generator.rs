//! Client response generator.
//!
//! Picks the client's next line by walking the response table in order.
//! Pure: no randomness and no hidden state, so the same sequence of trainee
//! replies always reproduces the same transcript.

use tracing::debug;

use super::rule::{ResponseRule, ResponseRuleKind, TurnContext, FALLBACK, RULES};
use crate::domain::conversation::Message;
use crate::domain::scenario::ScenarioId;

/// First-match-wins evaluator over the response table.
#[derive(Debug, Clone, Copy)]
pub struct ResponseGenerator {
    rules: &'static [ResponseRule],
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseGenerator {
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &'static [ResponseRule] {
        self.rules
    }

    /// Produces the client's next line.
    ///
    /// `client_history` is the chat before the trainee reply was appended and
    /// `last_client_text` the most recent line written by the client.
    pub fn next(
        &self,
        trainee_text: &str,
        client_history: &[Message],
        scenario: ScenarioId,
        last_client_text: &str,
    ) -> String {
        let ctx = TurnContext::new(trainee_text, client_history, scenario, last_client_text);
        let (kind, reply) = self.respond(&ctx);
        debug!(rule = ?kind, %scenario, transcript_len = ctx.transcript_len(), "selected client reply");
        reply.to_string()
    }

    /// Returns which rule wins for a turn, without producing text.
    pub fn select(&self, ctx: &TurnContext<'_>) -> ResponseRuleKind {
        self.winning_rule(ctx).kind
    }

    /// Returns the winning rule and its client line.
    pub fn respond(&self, ctx: &TurnContext<'_>) -> (ResponseRuleKind, &'static str) {
        let rule = self.winning_rule(ctx);
        (rule.kind, rule.respond(ctx))
    }

    fn winning_rule(&self, ctx: &TurnContext<'_>) -> &ResponseRule {
        self.rules
            .iter()
            .find(|rule| rule.matches(ctx))
            .unwrap_or(&FALLBACK)
    }
}

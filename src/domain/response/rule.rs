//! Response rules.
//!
//! Each rule pairs a predicate over the current turn with the client line it
//! produces. Rules are evaluated in table order and the first match wins, so
//! position in [`RULES`] is part of the behavior.

use serde::Serialize;

use super::templates::*;
use crate::domain::conversation::Message;
use crate::domain::foundation::{Lexicon, NormalizedText};
use crate::domain::scenario::{Scenario, ScenarioCatalog, ScenarioId};

/// Replies shorter than this (in characters) count as under-specified.
pub const MIN_SPECIFIED_CHARS: usize = 15;

/// Replies with fewer words than this count as under-specified.
pub const MIN_SPECIFIED_WORDS: usize = 3;

/// Fallback thresholds on the number of chat messages before the reply.
pub const EARLY_FALLBACK_BELOW: usize = 4;
pub const MIDDLE_FALLBACK_BELOW: usize = 7;

pub(super) const CLARIFICATION: Lexicon = Lexicon::new(&[
    "detail",
    "more info",
    "unclear",
    "can you explain",
    "what exactly",
]);
pub(super) const ESCALATION_PROMPTS: Lexicon = Lexicon::new(&["senior developer", "provide more context"]);
const SHARING: Lexicon = Lexicon::new(&["screen", "sharing", "show"]);
const CONFIRMATION: Lexicon = Lexicon::new(&["now", "will", "can", "sure"]);
const TIMELINE: Lexicon = Lexicon::new(&["hour", "day", "week", "time", "estimate"]);
const CAUSAL: Lexicon = Lexicon::new(&["because", "reason", "issue is", "problem is", "caused by"]);
const SUGGESTION: Lexicon = Lexicon::new(&[
    "suggest",
    "recommend",
    "could try",
    "should",
    "need to",
    "fix",
    "solution",
]);

/// Identifies which rule produced a client line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseRuleKind {
    /// Trainee asked for more detail; client repeats the scenario elaboration.
    Clarification,
    /// Trainee said yes to bringing in more help.
    Escalation,
    /// Reply too short or too few words to act on.
    UnderSpecified,
    /// Trainee offered to share their screen.
    ScreenShare,
    /// Trainee mentioned a timeframe.
    Timeline,
    /// Trainee explained a cause.
    CausalExplanation,
    /// Trainee proposed a fix.
    SuggestedFix,
    /// Nothing specific matched; keyed on transcript length.
    Fallback,
}

/// Everything a rule may look at for one trainee turn.
#[derive(Debug, Clone)]
pub struct TurnContext<'a> {
    reply: NormalizedText<'a>,
    client_history: &'a [Message],
    scenario: &'a Scenario,
    last_client: NormalizedText<'a>,
}

impl<'a> TurnContext<'a> {
    /// Builds the context for a reply.
    ///
    /// `client_history` is the chat as it stood before the reply was added.
    pub fn new(
        trainee_text: &'a str,
        client_history: &'a [Message],
        scenario: ScenarioId,
        last_client_text: &'a str,
    ) -> Self {
        Self {
            reply: NormalizedText::new(trainee_text),
            client_history,
            scenario: ScenarioCatalog::global().get(scenario),
            last_client: NormalizedText::new(last_client_text),
        }
    }

    pub fn reply(&self) -> &NormalizedText<'a> {
        &self.reply
    }

    pub fn scenario(&self) -> &'a Scenario {
        self.scenario
    }

    /// Number of chat messages before the reply.
    pub fn transcript_len(&self) -> usize {
        self.client_history.len()
    }
}

/// A predicate/action pair in the response table.
#[derive(Clone, Copy)]
pub struct ResponseRule {
    pub kind: ResponseRuleKind,
    matches: fn(&TurnContext<'_>) -> bool,
    respond: fn(&TurnContext<'_>) -> &'static str,
}

impl ResponseRule {
    /// Returns true if this rule applies to the turn.
    pub fn matches(&self, ctx: &TurnContext<'_>) -> bool {
        (self.matches)(ctx)
    }

    /// Produces the client line for a turn this rule matched.
    pub fn respond(&self, ctx: &TurnContext<'_>) -> &'static str {
        (self.respond)(ctx)
    }
}

impl std::fmt::Debug for ResponseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseRule").field("kind", &self.kind).finish()
    }
}

pub(crate) const FALLBACK: ResponseRule = ResponseRule {
    kind: ResponseRuleKind::Fallback,
    matches: |_| true,
    respond: fallback_reply,
};

/// The ordered response table.
pub const RULES: [ResponseRule; 8] = [
    ResponseRule {
        kind: ResponseRuleKind::Clarification,
        matches: is_clarification_request,
        respond: |ctx| ctx.scenario.elaboration,
    },
    ResponseRule {
        kind: ResponseRuleKind::Escalation,
        matches: |ctx| ctx.reply.contains("yes") && ESCALATION_PROMPTS.matches(&ctx.last_client),
        respond: |_| ESCALATION_REPLY,
    },
    ResponseRule {
        kind: ResponseRuleKind::UnderSpecified,
        matches: |ctx| {
            let reply = &ctx.reply;
            let too_thin =
                reply.char_len() < MIN_SPECIFIED_CHARS || reply.word_count() < MIN_SPECIFIED_WORDS;
            too_thin && !is_clarification_request(ctx)
        },
        respond: |_| NEED_MORE_INFORMATION_REPLY,
    },
    ResponseRule {
        kind: ResponseRuleKind::ScreenShare,
        matches: |ctx| SHARING.matches(&ctx.reply) && CONFIRMATION.matches(&ctx.reply),
        respond: |_| SCREEN_SHARE_REPLY,
    },
    ResponseRule {
        kind: ResponseRuleKind::Timeline,
        matches: |ctx| TIMELINE.matches(&ctx.reply),
        respond: |_| TIMELINE_REPLY,
    },
    ResponseRule {
        kind: ResponseRuleKind::CausalExplanation,
        matches: |ctx| CAUSAL.matches(&ctx.reply),
        respond: |_| EXPLANATION_REPLY,
    },
    ResponseRule {
        kind: ResponseRuleKind::SuggestedFix,
        matches: |ctx| SUGGESTION.matches(&ctx.reply),
        respond: |_| SUGGESTED_FIX_REPLY,
    },
    FALLBACK,
];

fn is_clarification_request(ctx: &TurnContext<'_>) -> bool {
    let reply = &ctx.reply;
    CLARIFICATION.matches(reply)
        || (reply.contains("better") && reply.contains("explain"))
        || (reply.contains("cant help") && reply.contains("unclear"))
}

fn fallback_reply(ctx: &TurnContext<'_>) -> &'static str {
    match ctx.transcript_len() {
        n if n < EARLY_FALLBACK_BELOW => EARLY_FALLBACK_REPLY,
        n if n < MIDDLE_FALLBACK_BELOW => MIDDLE_FALLBACK_REPLY,
        _ => LATE_FALLBACK_REPLY,
    }
}

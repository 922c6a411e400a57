//! Response domain module.
//!
//! The client side of a turn: an ordered table of pattern rules that decides
//! what the simulated client says next.

mod generator;
mod rule;
pub mod templates;

pub use generator::ResponseGenerator;
pub use rule::{
    ResponseRule, ResponseRuleKind, TurnContext, EARLY_FALLBACK_BELOW, MIDDLE_FALLBACK_BELOW,
    MIN_SPECIFIED_CHARS, MIN_SPECIFIED_WORDS, RULES,
};

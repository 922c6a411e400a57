//! Feedback domain module.
//!
//! The advisor side of a turn: heuristics that classify a trainee reply and
//! the structured feedback they produce.

mod communication_trait;
mod evaluator;
mod result;

pub use communication_trait::CommunicationTrait;
pub use evaluator::{
    is_early_in_conversation, FeedbackEvaluator, EARLY_TRANSCRIPT_MAX_MESSAGES,
    MIN_RESPONSE_CHARS,
};
pub use result::{FeedbackResult, FeedbackVerdict};

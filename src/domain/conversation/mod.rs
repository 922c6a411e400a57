//! Conversation domain module.
//!
//! Messages, transcripts and the per-session state that the response rules
//! and feedback heuristics read from.

mod message;
mod stage;
mod state;
mod transcript;

pub use message::{Message, Speaker};
pub use stage::{ConversationStage, INITIAL_STAGE_MAX_PRIOR_TURNS};
pub use state::ConversationState;
pub use transcript::Transcript;

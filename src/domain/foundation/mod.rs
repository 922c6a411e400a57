//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types and the keyword matcher that form the
//! vocabulary of the trainer domain.

mod errors;
mod ids;
mod lexicon;

pub use errors::{ErrorCode, TrainerError};
pub use ids::SessionId;
pub use lexicon::{Lexicon, NormalizedText};

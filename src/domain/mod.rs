//! Domain layer containing the trainer's rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, errors, keyword matching)
//! - `scenario` - Fixed catalog of client scenarios
//! - `conversation` - Messages, transcript channels and per-session state
//! - `feedback` - Communication heuristics applied to trainee replies
//! - `response` - Ordered rules that pick the client's next line

pub mod conversation;
pub mod feedback;
pub mod foundation;
pub mod response;
pub mod scenario;

//! Session orchestration.
//!
//! Holds one conversation's state and sequences the feedback evaluator and
//! response generator for each trainee turn.

mod controller;
mod events;

pub use controller::SessionController;
pub use events::{SessionEvent, SessionSnapshot};

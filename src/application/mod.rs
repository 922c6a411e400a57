//! Application layer - session orchestration.
//!
//! This layer sequences pure domain rules and owns the only mutable state:
//! one conversation per controller.

pub mod session;

pub use session::{SessionController, SessionEvent, SessionSnapshot};

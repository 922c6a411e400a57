//! Cultural Trainer - Communication Coaching for Offshore Developers
//!
//! This crate simulates a US client conversation and coaches the trainee on
//! each reply: a rule-based advisor grades tone and content, and a scripted
//! client answers after a short delay.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;

pub use application::{SessionController, SessionEvent, SessionSnapshot};
pub use domain::foundation::TrainerError;
pub use domain::scenario::{list_scenarios, lookup, ScenarioId};

//! Scenario domain module.
//!
//! Fixed catalog of client personas and their technical problems.

mod catalog;
mod scenario_id;

pub use catalog::{list_scenarios, lookup, Scenario, ScenarioCatalog, ScenarioSummary};
pub use scenario_id::ScenarioId;

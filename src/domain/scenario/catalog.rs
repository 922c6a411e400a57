//! Scenario catalog.
//!
//! Static registry of the client's opening complaint and follow-up detail for
//! every scenario. Every entry is a `static`, so nothing is built at runtime.

use serde::Serialize;

use super::scenario_id::ScenarioId;
use crate::domain::foundation::TrainerError;

/// A fixed technical-support situation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    /// Which scenario this is.
    pub id: ScenarioId,
    /// First client message, shown as soon as the scenario starts.
    pub opening: &'static str,
    /// Detailed description the client gives when asked for clarification.
    pub elaboration: &'static str,
}

impl Scenario {
    const fn new(id: ScenarioId, opening: &'static str, elaboration: &'static str) -> Self {
        Self {
            id,
            opening,
            elaboration,
        }
    }
}

/// Entry for the scenario selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioSummary {
    pub id: ScenarioId,
    pub label: &'static str,
}

/// Registry of all built-in scenarios.
#[derive(Debug)]
pub struct ScenarioCatalog {
    _private: (),
}

static CATALOG: ScenarioCatalog = ScenarioCatalog { _private: () };

static REACT: Scenario = Scenario::new(ScenarioId::React, REACT_OPENING, REACT_ELABORATION);
static ANGULAR: Scenario = Scenario::new(ScenarioId::Angular, ANGULAR_OPENING, ANGULAR_ELABORATION);
static JAVASCRIPT: Scenario =
    Scenario::new(ScenarioId::Javascript, JAVASCRIPT_OPENING, JAVASCRIPT_ELABORATION);
static PYTHON: Scenario = Scenario::new(ScenarioId::Python, PYTHON_OPENING, PYTHON_ELABORATION);
static DOTNET: Scenario = Scenario::new(ScenarioId::Dotnet, DOTNET_OPENING, DOTNET_ELABORATION);
static N8N: Scenario = Scenario::new(ScenarioId::N8n, N8N_OPENING, N8N_ELABORATION);
static CLAUDE: Scenario = Scenario::new(ScenarioId::Claude, CLAUDE_OPENING, CLAUDE_ELABORATION);

impl ScenarioCatalog {
    /// Returns the process-wide catalog.
    pub fn global() -> &'static ScenarioCatalog {
        &CATALOG
    }

    /// Looks up a scenario by its wire id.
    ///
    /// # Errors
    ///
    /// - `UnknownScenario` if `id` is not one of the seven built-in ids
    pub fn lookup(&self, id: &str) -> Result<&'static Scenario, TrainerError> {
        let id: ScenarioId = id.parse()?;
        Ok(self.get(id))
    }

    /// Returns the scenario for an already-validated id.
    pub fn get(&self, id: ScenarioId) -> &'static Scenario {
        match id {
            ScenarioId::React => &REACT,
            ScenarioId::Angular => &ANGULAR,
            ScenarioId::Javascript => &JAVASCRIPT,
            ScenarioId::Python => &PYTHON,
            ScenarioId::Dotnet => &DOTNET,
            ScenarioId::N8n => &N8N,
            ScenarioId::Claude => &CLAUDE,
        }
    }

    /// Lists every scenario in canonical order.
    pub fn list(&self) -> Vec<ScenarioSummary> {
        ScenarioId::all()
            .iter()
            .map(|id| ScenarioSummary {
                id: *id,
                label: id.label(),
            })
            .collect()
    }
}

/// Looks up a scenario in the global catalog.
pub fn lookup(id: &str) -> Result<&'static Scenario, TrainerError> {
    ScenarioCatalog::global().lookup(id)
}

/// Lists all scenarios for the selection control.
pub fn list_scenarios() -> Vec<ScenarioSummary> {
    ScenarioCatalog::global().list()
}

// ============================================================================
// Opening Messages
// ============================================================================

const REACT_OPENING: &str = "Hello! I need help with our React application. The navigation component is broken after the latest update.";

const ANGULAR_OPENING: &str = "We're experiencing issues with our Angular application. The data binding seems to be inconsistent across different components.";

const JAVASCRIPT_OPENING: &str = "Our JavaScript code is failing when making API calls. I think there's an issue with promises.";

const PYTHON_OPENING: &str = "The Python script for processing our CSV files is running extremely slow. Can you optimize it?";

const DOTNET_OPENING: &str = "Our .NET API endpoints are returning 500 errors when handling concurrent requests.";

const N8N_OPENING: &str = "We need help setting up an n8n workflow that integrates with our CRM system. The automation isn't working correctly.";

const CLAUDE_OPENING: &str = "We're implementing Claude 3.7 in our customer service portal, but we're having trouble with the prompt engineering.";

// ============================================================================
// Elaborations
// ============================================================================

const REACT_ELABORATION: &str = "The specific issue is that when users click on any navigation link in the header, they get redirected to the homepage instead of the correct page. This started happening after we updated React Router from version 5 to version 6 yesterday. None of our routes seem to be matching properly anymore.";

const ANGULAR_ELABORATION: &str = "When users update information in one component, sometimes the changes don't reflect in other components that should be displaying the same data. It seems like our Observable subscriptions might not be working correctly, or perhaps we have an issue with change detection. This is happening specifically with our customer profile management screens.";

const JAVASCRIPT_ELABORATION: &str = "Our frontend is making API calls using fetch() with promises, but in production, the calls fail with 'Uncaught Promise' errors. The API endpoint works when tested directly, so it seems to be an issue with how we're handling the promises in our code. The errors specifically mention something about 'unhandled rejection'.";

const PYTHON_ELABORATION: &str = "Our Python script processes CSV files with customer data. It used to analyze 1,000 records in about 30 seconds, but now takes over 10 minutes with the same volume. We're particularly concerned about a loop that seems to be reading each row multiple times unnecessarily. The script uses pandas for data processing.";

const DOTNET_ELABORATION: &str = "Our .NET API endpoints return 500 errors, but only when we have about 20+ simultaneous users. The logs show database connection timeout errors. We suspect it might be related to how we're managing our SQL connection pooling, but we're not sure how to properly configure it for high concurrency.";

const N8N_ELABORATION: &str = "We're trying to create an n8n workflow that automatically creates tasks in our CRM when certain events happen. We've got the basic workflow set up, but we're having trouble with the conditional logic and data transformation. Specifically, we need the workflow to parse incoming webhook data, filter based on certain criteria, and then format the data correctly before sending it to our CRM API. The error logs show that the data isn't being transformed correctly.";

const CLAUDE_ELABORATION: &str = "We've integrated Claude 3.7 into our customer service portal to help answer common questions, but the responses aren't as helpful as we'd like. We need help refining our prompts to get more consistent and accurate responses. We're particularly struggling with getting Claude to correctly extract and use information from our product database. The current prompts either produce overly verbose responses or miss key details from our knowledge base.";

#[cfg(test)]
mod tests {
    use super::*;

    mod lookup {
        use super::*;

        #[test]
        fn succeeds_for_all_seven_ids() {
            for id in ["react", "angular", "javascript", "python", "dotnet", "n8n", "claude"] {
                let scenario = lookup(id).unwrap();
                assert_eq!(scenario.id.as_str(), id);
            }
        }

        #[test]
        fn fails_for_unknown_id() {
            assert_eq!(
                lookup("cobol").unwrap_err(),
                TrainerError::unknown_scenario("cobol")
            );
        }

        #[test]
        fn fails_for_empty_id() {
            assert!(lookup("").is_err());
        }

        #[test]
        fn react_opening_matches_known_text() {
            let scenario = lookup("react").unwrap();
            assert!(scenario
                .opening
                .starts_with("Hello! I need help with our React application"));
        }
    }

    mod contents {
        use super::*;

        #[test]
        fn every_scenario_has_distinct_opening_and_elaboration() {
            for id in ScenarioId::all() {
                let scenario = ScenarioCatalog::global().get(*id);
                assert!(!scenario.opening.is_empty());
                assert!(!scenario.elaboration.is_empty());
                assert_ne!(scenario.opening, scenario.elaboration);
            }
        }

        #[test]
        fn every_id_resolves_to_its_own_entry() {
            for id in ScenarioId::all() {
                assert_eq!(ScenarioCatalog::global().get(*id).id, *id);
            }
        }

        #[test]
        fn lookup_and_get_return_the_same_static() {
            let by_name = lookup("dotnet").unwrap() as *const Scenario;
            let by_id = ScenarioCatalog::global().get(ScenarioId::Dotnet) as *const Scenario;
            assert_eq!(by_name, by_id);
        }
    }

    mod listing {
        use super::*;

        #[test]
        fn lists_all_scenarios_in_canonical_order() {
            let listed: Vec<ScenarioId> = list_scenarios().iter().map(|s| s.id).collect();
            assert_eq!(listed, ScenarioId::all().to_vec());
        }

        #[test]
        fn listing_carries_labels() {
            let first = list_scenarios()[0];
            assert_eq!(first.label, "React Navigation Component Issue");
        }
    }
}

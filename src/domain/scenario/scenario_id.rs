//! ScenarioId enum naming the seven built-in training scenarios.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::TrainerError;

/// The fixed set of technical-support situations a trainee can practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioId {
    React,
    Angular,
    Javascript,
    Python,
    Dotnet,
    N8n,
    Claude,
}

impl ScenarioId {
    /// Returns all scenario ids in canonical order.
    pub fn all() -> &'static [ScenarioId] {
        &[
            ScenarioId::React,
            ScenarioId::Angular,
            ScenarioId::Javascript,
            ScenarioId::Python,
            ScenarioId::Dotnet,
            ScenarioId::N8n,
            ScenarioId::Claude,
        ]
    }

    /// Returns the wire id used by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioId::React => "react",
            ScenarioId::Angular => "angular",
            ScenarioId::Javascript => "javascript",
            ScenarioId::Python => "python",
            ScenarioId::Dotnet => "dotnet",
            ScenarioId::N8n => "n8n",
            ScenarioId::Claude => "claude",
        }
    }

    /// Returns the label shown in the scenario selection control.
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioId::React => "React Navigation Component Issue",
            ScenarioId::Angular => "Angular Data Binding Inconsistencies",
            ScenarioId::Javascript => "JavaScript Async Function Problems",
            ScenarioId::Python => "Python Data Processing Optimization",
            ScenarioId::Dotnet => ".NET API Endpoint Errors",
            ScenarioId::N8n => "n8n CRM Workflow Automation",
            ScenarioId::Claude => "Claude Prompt Engineering",
        }
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        ScenarioId::React
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScenarioId {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TrainerError::unknown_scenario(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_7_scenarios() {
        assert_eq!(ScenarioId::all().len(), 7);
    }

    #[test]
    fn parses_every_wire_id() {
        for id in ScenarioId::all() {
            assert_eq!(id.as_str().parse::<ScenarioId>().unwrap(), *id);
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(
            "React".parse::<ScenarioId>(),
            Err(TrainerError::unknown_scenario("React"))
        );
    }

    #[test]
    fn rejects_unknown_ids() {
        for bad in ["", "rust", "vue", " react", "n8n "] {
            assert!(matches!(
                bad.parse::<ScenarioId>(),
                Err(TrainerError::UnknownScenario { .. })
            ));
        }
    }

    #[test]
    fn serializes_to_wire_id() {
        assert_eq!(serde_json::to_string(&ScenarioId::N8n).unwrap(), "\"n8n\"");
        assert_eq!(
            serde_json::to_string(&ScenarioId::Javascript).unwrap(),
            "\"javascript\""
        );
    }

    #[test]
    fn deserializes_from_wire_id() {
        let id: ScenarioId = serde_json::from_str("\"dotnet\"").unwrap();
        assert_eq!(id, ScenarioId::Dotnet);
    }

    #[test]
    fn default_is_react() {
        assert_eq!(ScenarioId::default(), ScenarioId::React);
    }

    #[test]
    fn every_scenario_has_a_label() {
        for id in ScenarioId::all() {
            assert!(!id.label().is_empty());
        }
    }
}

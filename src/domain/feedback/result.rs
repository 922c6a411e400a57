//! Feedback produced for one trainee reply.

use serde::Serialize;
use std::fmt;

use super::communication_trait::CommunicationTrait;

/// Overall framing of a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackVerdict {
    /// The reply was too short to assess.
    TooBrief,
    /// Nothing to improve.
    Commendation,
    /// Some strengths, some areas to improve.
    Mixed,
}

/// Immutable result of evaluating a trainee reply.
///
/// Trait order follows the order in which the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackResult {
    echoed_input: String,
    positive_traits: Vec<CommunicationTrait>,
    improvement_traits: Vec<CommunicationTrait>,
}

impl FeedbackResult {
    pub(crate) fn new(
        echoed_input: impl Into<String>,
        positive_traits: Vec<CommunicationTrait>,
        improvement_traits: Vec<CommunicationTrait>,
    ) -> Self {
        Self {
            echoed_input: echoed_input.into(),
            positive_traits,
            improvement_traits,
        }
    }

    /// The trainee's reply, verbatim.
    pub fn echoed_input(&self) -> &str {
        &self.echoed_input
    }

    pub fn positive_traits(&self) -> &[CommunicationTrait] {
        &self.positive_traits
    }

    pub fn improvement_traits(&self) -> &[CommunicationTrait] {
        &self.improvement_traits
    }

    pub fn verdict(&self) -> FeedbackVerdict {
        if self.improvement_traits.contains(&CommunicationTrait::TooBrief) {
            FeedbackVerdict::TooBrief
        } else if self.improvement_traits.is_empty() {
            FeedbackVerdict::Commendation
        } else {
            FeedbackVerdict::Mixed
        }
    }

    /// Renders the advisor text shown to the trainee.
    pub fn render(&self) -> String {
        let mut out = format!("Your response: \"{}\"\n\n", self.echoed_input);
        match self.verdict() {
            FeedbackVerdict::TooBrief => {
                out.push_str("Suggestion: ");
                out.push_str(CommunicationTrait::TooBrief.advice());
            }
            FeedbackVerdict::Commendation => {
                out.push_str(
                    "Excellent! Your communication was culturally appropriate and technically sound. I noticed:",
                );
                push_bullets(&mut out, &self.positive_traits);
            }
            FeedbackVerdict::Mixed => {
                out.push_str("Suggestion: Your response could be improved. Here's what you did well:");
                push_bullets(&mut out, &self.positive_traits);
                out.push_str("\n\nAreas to improve:");
                push_bullets(&mut out, &self.improvement_traits);
            }
        }
        out
    }
}

impl fmt::Display for FeedbackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn push_bullets(out: &mut String, traits: &[CommunicationTrait]) {
    for t in traits {
        out.push_str("\n• ");
        out.push_str(t.advice());
    }
}

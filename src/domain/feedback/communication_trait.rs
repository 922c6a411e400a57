//! Communicative qualities the advisor can point out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named communicative quality observed in a trainee reply.
///
/// Every heuristic produces either its positive or its improvement variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationTrait {
    /// Reply shorter than the minimum length. Suppresses every other check.
    TooBrief,

    GoodFlow,
    MissingGreeting,

    GoodEmpathy,
    LacksEmpathy,

    GoodActionOrientation,
    NotActionOriented,

    GoodTimeEstimation,
    NoTimeframe,

    GoodExplanation,
    NoCausalExplanation,

    GoodScreenShareResponse,
    NoScreenShareConfirmation,
}

impl CommunicationTrait {
    /// Returns the short trait name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TooBrief => "too brief",
            Self::GoodFlow => "good flow",
            Self::MissingGreeting => "missing greeting",
            Self::GoodEmpathy => "good empathy",
            Self::LacksEmpathy => "lacks empathy",
            Self::GoodActionOrientation => "good action orientation",
            Self::NotActionOriented => "not action-oriented",
            Self::GoodTimeEstimation => "good time estimation",
            Self::NoTimeframe => "no timeframe given",
            Self::GoodExplanation => "good explanation",
            Self::NoCausalExplanation => "no causal explanation",
            Self::GoodScreenShareResponse => "good screen share response",
            Self::NoScreenShareConfirmation => "did not confirm screen share",
        }
    }

    /// Returns the sentence shown to the trainee for this trait.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::TooBrief => "Your response is too brief. In U.S. business culture, clients appreciate thorough answers that acknowledge their concerns. Try elaborating more and offering specific next steps.",
            Self::GoodFlow => "Good conversation flow",
            Self::MissingGreeting => "Starting with a greeting (e.g., 'Hello' or 'Hi [Name]') establishes a professional but friendly tone in initial messages",
            Self::GoodEmpathy => "Good empathy and acknowledgment",
            Self::LacksEmpathy => "Acknowledging the client's concerns shows empathy, which is valued in U.S. business communication",
            Self::GoodActionOrientation => "Good action-oriented communication",
            Self::NotActionOriented => "Include action-oriented language that clearly states what you will do to address their concerns",
            Self::GoodTimeEstimation => "Good time estimation",
            Self::NoTimeframe => "When asked about timelines, U.S. clients expect specific timeframes or estimates",
            Self::GoodExplanation => "Good explanation approach",
            Self::NoCausalExplanation => "When explaining technical concepts, use simple cause-and-effect language that non-technical people can understand",
            Self::GoodScreenShareResponse => "Good response to screen sharing request",
            Self::NoScreenShareConfirmation => "When asked to share your screen, confirm that you're doing so and explain what they'll be seeing",
        }
    }

    /// Returns true for traits the trainee should keep doing.
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            Self::GoodFlow
                | Self::GoodEmpathy
                | Self::GoodActionOrientation
                | Self::GoodTimeEstimation
                | Self::GoodExplanation
                | Self::GoodScreenShareResponse
        )
    }
}

impl fmt::Display for CommunicationTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

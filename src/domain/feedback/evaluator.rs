//! Feedback evaluator.
//!
//! Scores a trainee reply against fixed communication heuristics. Pure: the
//! result depends only on the three inputs.

use tracing::debug;

use super::communication_trait::CommunicationTrait;
use super::result::FeedbackResult;
use crate::domain::foundation::{Lexicon, NormalizedText};

/// Replies shorter than this (in characters) get only the "too brief" trait.
pub const MIN_RESPONSE_CHARS: usize = 20;

/// Greeting is only expected while the chat holds at most this many messages.
pub const EARLY_TRANSCRIPT_MAX_MESSAGES: usize = 2;

const GREETING: Lexicon = Lexicon::new(&["hello", "hi"]);
const EMPATHY: Lexicon = Lexicon::new(&["understand", "see", "sorry", "let me", "i can"]);
const ACTION: Lexicon = Lexicon::new(&["can", "will", "could", "going to", "plan to"]);

/// A heuristic that only applies when the client's last message raised a topic.
#[derive(Debug, Clone, Copy)]
struct ContextCheck {
    trigger: Lexicon,
    required: Lexicon,
    satisfied: CommunicationTrait,
    missing: CommunicationTrait,
}

const CONTEXT_CHECKS: [ContextCheck; 3] = [
    ContextCheck {
        trigger: Lexicon::new(&["timeline", "when"]),
        required: Lexicon::new(&["by", "estimate", "hour", "day", "week", "time"]),
        satisfied: CommunicationTrait::GoodTimeEstimation,
        missing: CommunicationTrait::NoTimeframe,
    },
    ContextCheck {
        trigger: Lexicon::new(&["explain", "understand"]),
        required: Lexicon::new(&["because", "reason", "due to", "caused by"]),
        satisfied: CommunicationTrait::GoodExplanation,
        missing: CommunicationTrait::NoCausalExplanation,
    },
    ContextCheck {
        trigger: Lexicon::new(&["share", "screen"]),
        required: Lexicon::new(&["share", "screen", "show", "see"]),
        satisfied: CommunicationTrait::GoodScreenShareResponse,
        missing: CommunicationTrait::NoScreenShareConfirmation,
    },
];

/// Returns true while a greeting is still expected, given the number of chat
/// messages present before the trainee's reply is added.
pub fn is_early_in_conversation(transcript_len: usize) -> bool {
    transcript_len <= EARLY_TRANSCRIPT_MAX_MESSAGES
}

/// Rule-based evaluator of trainee replies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackEvaluator;

impl FeedbackEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a trainee reply in the context of the client's last message.
    ///
    /// When `is_early` is false the greeting check is skipped and counted as
    /// good flow.
    pub fn evaluate(&self, trainee_text: &str, last_client_text: &str, is_early: bool) -> FeedbackResult {
        let reply = NormalizedText::new(trainee_text);

        if reply.char_len() < MIN_RESPONSE_CHARS {
            debug!(chars = reply.char_len(), "reply too brief, skipping remaining checks");
            return FeedbackResult::new(trainee_text, Vec::new(), vec![CommunicationTrait::TooBrief]);
        }

        let client = NormalizedText::new(last_client_text);
        let mut positives = Vec::new();
        let mut improvements = Vec::new();

        let mut record = |ok: bool, good: CommunicationTrait, bad: CommunicationTrait| {
            if ok {
                positives.push(good);
            } else {
                improvements.push(bad);
            }
        };

        record(
            !is_early || GREETING.matches(&reply),
            CommunicationTrait::GoodFlow,
            CommunicationTrait::MissingGreeting,
        );
        record(
            EMPATHY.matches(&reply),
            CommunicationTrait::GoodEmpathy,
            CommunicationTrait::LacksEmpathy,
        );
        record(
            ACTION.matches(&reply),
            CommunicationTrait::GoodActionOrientation,
            CommunicationTrait::NotActionOriented,
        );

        for check in CONTEXT_CHECKS.iter().filter(|c| c.trigger.matches(&client)) {
            record(check.required.matches(&reply), check.satisfied, check.missing);
        }

        let result = FeedbackResult::new(trainee_text, positives, improvements);
        debug!(
            verdict = ?result.verdict(),
            positives = result.positive_traits().len(),
            improvements = result.improvement_traits().len(),
            "evaluated trainee reply"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::FeedbackVerdict;
    use CommunicationTrait::*;

    const REACT_OPENING: &str = "Hello! I need help with our React application. The navigation component is broken after the latest update.";

    fn evaluate(text: &str, client: &str, early: bool) -> FeedbackResult {
        FeedbackEvaluator::new().evaluate(text, client, early)
    }

    mod too_brief {
        use super::*;

        #[test]
        fn short_reply_yields_only_too_brief() {
            let result = evaluate("ok", REACT_OPENING, true);
            assert!(result.positive_traits().is_empty());
            assert_eq!(result.improvement_traits(), [TooBrief]);
            assert_eq!(result.echoed_input(), "ok");
        }

        #[test]
        fn nineteen_chars_is_still_too_brief() {
            let text = "Hi I will see to it"; // 19 chars
            assert_eq!(text.chars().count(), 19);
            assert_eq!(evaluate(text, "when?", true).verdict(), FeedbackVerdict::TooBrief);
        }

        #[test]
        fn twenty_chars_runs_full_checks() {
            let text = "Hi I will see to it!"; // 20 chars
            assert_eq!(text.chars().count(), 20);
            assert_ne!(evaluate(text, REACT_OPENING, true).verdict(), FeedbackVerdict::TooBrief);
        }
    }

    mod core_checks {
        use super::*;

        #[test]
        fn greeting_empathy_and_action_all_positive() {
            let result = evaluate(
                "Hi, I understand the issue, I will check the router config now.",
                REACT_OPENING,
                true,
            );
            assert_eq!(
                result.positive_traits(),
                [GoodFlow, GoodEmpathy, GoodActionOrientation]
            );
            assert!(result.improvement_traits().is_empty());
            assert_eq!(result.verdict(), FeedbackVerdict::Commendation);
        }

        #[test]
        fn missing_greeting_flagged_early() {
            let result = evaluate("The router config must be wrong there.", REACT_OPENING, true);
            assert!(result.improvement_traits().contains(&MissingGreeting));
        }

        #[test]
        fn greeting_check_skipped_later_in_conversation() {
            let result = evaluate("The router config must be wrong there.", REACT_OPENING, false);
            assert_eq!(result.positive_traits()[0], GoodFlow);
            assert!(!result.improvement_traits().contains(&MissingGreeting));
        }

        #[test]
        fn lacking_empathy_and_action_flagged() {
            let result = evaluate("Hello, the router config looks wrong.", REACT_OPENING, true);
            assert_eq!(result.positive_traits(), [GoodFlow]);
            assert_eq!(result.improvement_traits(), [LacksEmpathy, NotActionOriented]);
            assert_eq!(result.verdict(), FeedbackVerdict::Mixed);
        }

        #[test]
        fn matching_is_case_insensitive() {
            let result = evaluate("HELLO, I UNDERSTAND AND I WILL FIX IT", REACT_OPENING, true);
            assert!(result.improvement_traits().is_empty());
        }
    }

    mod context_checks {
        use super::*;

        const FULL_MARKS: &str = "Hello, I understand and I will handle it";

        #[test]
        fn timeline_question_requires_timeframe() {
            let result = evaluate(FULL_MARKS, "When can this be fixed?", true);
            assert_eq!(result.improvement_traits(), [NoTimeframe]);
        }

        #[test]
        fn timeline_question_satisfied_by_estimate() {
            let result = evaluate(
                "Hello, I understand and I will have it done in a day",
                "What is the timeline?",
                true,
            );
            assert!(result.improvement_traits().is_empty());
            assert_eq!(result.positive_traits().last(), Some(&GoodTimeEstimation));
        }

        #[test]
        fn explanation_request_requires_cause() {
            let result = evaluate(FULL_MARKS, "Can you explain what happened?", true);
            assert_eq!(result.improvement_traits(), [NoCausalExplanation]);
        }

        #[test]
        fn explanation_request_satisfied_by_cause() {
            let result = evaluate(
                "Hello, I will explain: it broke because of the router upgrade",
                "Help me understand this",
                true,
            );
            assert!(result.positive_traits().contains(&GoodExplanation));
        }

        #[test]
        fn screen_share_request_requires_confirmation() {
            let result = evaluate(
                "Hello, I understand and I will fix it",
                "Could you share your screen?",
                true,
            );
            assert_eq!(result.improvement_traits(), [NoScreenShareConfirmation]);
        }

        #[test]
        fn screen_share_request_satisfied_by_confirmation() {
            let result = evaluate(
                "Hello, I understand. I can share my screen now",
                "Could you share your screen?",
                true,
            );
            assert!(result.improvement_traits().is_empty());
            assert_eq!(
                result.positive_traits(),
                [GoodFlow, GoodEmpathy, GoodActionOrientation, GoodScreenShareResponse]
            );
        }

        #[test]
        fn untriggered_checks_add_nothing() {
            let result = evaluate(FULL_MARKS, REACT_OPENING, true);
            assert_eq!(result.positive_traits().len(), 3);
            assert!(result.improvement_traits().is_empty());
        }

        #[test]
        fn several_triggers_keep_check_order() {
            let result = evaluate(FULL_MARKS, "When can you share the screen and explain?", true);
            assert_eq!(
                result.improvement_traits(),
                [NoTimeframe, NoCausalExplanation, NoScreenShareConfirmation]
            );
        }
    }

    mod early_detection {
        use super::*;

        #[test]
        fn early_while_two_or_fewer_messages() {
            assert!(is_early_in_conversation(0));
            assert!(is_early_in_conversation(1));
            assert!(is_early_in_conversation(2));
            assert!(!is_early_in_conversation(3));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn evaluation_is_deterministic(text in ".{0,80}", client in ".{0,80}", early: bool) {
                let a = evaluate(&text, &client, early);
                let b = evaluate(&text, &client, early);
                prop_assert_eq!(a.render(), b.render());
                prop_assert_eq!(a, b);
            }

            #[test]
            fn short_replies_only_get_too_brief(text in ".{0,19}", client in ".{0,80}", early: bool) {
                let result = evaluate(&text, &client, early);
                prop_assert!(result.positive_traits().is_empty());
                prop_assert_eq!(result.improvement_traits(), &[TooBrief][..]);
            }

            #[test]
            fn long_replies_never_too_brief(text in ".{20,80}", client in ".{0,80}", early: bool) {
                let result = evaluate(&text, &client, early);
                prop_assert!(!result.improvement_traits().contains(&TooBrief));
                // greeting, empathy and action always report one way or the other
                prop_assert!(result.positive_traits().len() + result.improvement_traits().len() >= 3);
            }
        }
    }
}

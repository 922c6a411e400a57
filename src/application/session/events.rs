//! Events published by a session controller.
//!
//! The presentation layer subscribes to these to know when to re-render.
//! Feedback for a submission is always published before the client reply
//! scheduled by the same submission.

use serde::Serialize;

use crate::domain::conversation::{ConversationStage, Message};
use crate::domain::feedback::FeedbackResult;
use crate::domain::foundation::SessionId;
use crate::domain::scenario::ScenarioId;

/// Something observable happened in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A scenario was started or reset; prior transcripts are gone.
    Started {
        session_id: SessionId,
        scenario: ScenarioId,
        opening: Message,
    },

    /// The advisor evaluated a trainee reply.
    FeedbackIssued {
        session_id: SessionId,
        feedback: FeedbackResult,
    },

    /// The client's delayed reply landed in the chat.
    ClientReplied {
        session_id: SessionId,
        message: Message,
    },
}

impl SessionEvent {
    /// Returns the session run this event belongs to.
    pub fn session_id(&self) -> SessionId {
        match self {
            Self::Started { session_id, .. }
            | Self::FeedbackIssued { session_id, .. }
            | Self::ClientReplied { session_id, .. } => *session_id,
        }
    }
}

/// Point-in-time copy of a session, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub scenario: ScenarioId,
    pub stage: ConversationStage,
    /// Chat with the client, both speakers in order.
    pub client_channel: Vec<Message>,
    /// One feedback entry per accepted trainee reply.
    pub advisor_channel: Vec<FeedbackResult>,
}

impl SessionSnapshot {
    /// Returns the most recent client-written message, if any.
    pub fn last_client_message(&self) -> Option<&Message> {
        self.client_channel.iter().rev().find(|m| m.is_client())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_is_available_for_every_variant() {
        let id = SessionId::new();
        let event = SessionEvent::ClientReplied {
            session_id: id,
            message: Message::client("Thanks"),
        };
        assert_eq!(event.session_id(), id);
    }

    #[test]
    fn serializes_with_type_tag() {
        let event = SessionEvent::Started {
            session_id: SessionId::new(),
            scenario: ScenarioId::Angular,
            opening: Message::client("Hi"),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "started");
        assert_eq!(json["scenario"], "angular");
    }
}

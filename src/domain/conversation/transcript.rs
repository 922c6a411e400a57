//! The two append-only channels shown to the trainee.
//!
//! - client channel: the chat with the client persona, both speakers interleaved
//! - advisor channel: one feedback entry per accepted trainee message

use serde::Serialize;

use super::message::Message;
use crate::domain::feedback::FeedbackResult;

/// Client and advisor channels of one scenario run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    client_channel: Vec<Message>,
    advisor_channel: Vec<FeedbackResult>,
}

impl Transcript {
    /// Starts a transcript with the client's opening message.
    pub fn opened_with(opening: impl Into<String>) -> Self {
        Self {
            client_channel: vec![Message::client(opening)],
            advisor_channel: Vec::new(),
        }
    }

    pub fn push_trainee(&mut self, text: impl Into<String>) {
        self.client_channel.push(Message::trainee(text));
    }

    pub fn push_client(&mut self, text: impl Into<String>) {
        self.client_channel.push(Message::client(text));
    }

    pub fn push_feedback(&mut self, feedback: FeedbackResult) {
        self.advisor_channel.push(feedback);
    }

    pub fn client_channel(&self) -> &[Message] {
        &self.client_channel
    }

    pub fn advisor_channel(&self) -> &[FeedbackResult] {
        &self.advisor_channel
    }

    /// Text of the most recent message written by the client, or "" if none.
    pub fn last_client_text(&self) -> &str {
        self.client_channel
            .iter()
            .rev()
            .find(|m| m.is_client())
            .map(Message::text)
            .unwrap_or("")
    }
}

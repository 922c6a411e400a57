//! Message entity for the client chat.
//!
//! Messages are immutable records of client/trainee exchanges. The chat
//! transcript interleaves both speakers in the order they were written.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who wrote a message in the client chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The simulated customer persona.
    Client,
    /// The person being trained.
    Trainee,
}

impl Speaker {
    /// Returns the sender name shown next to each chat line.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Client => "US Client",
            Self::Trainee => "You",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An immutable chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    speaker: Speaker,
    text: String,
}

impl Message {
    /// Creates a message with the given speaker and text.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    /// Creates a client message.
    pub fn client(text: impl Into<String>) -> Self {
        Self::new(Speaker::Client, text)
    }

    /// Creates a trainee message.
    pub fn trainee(text: impl Into<String>) -> Self {
        Self::new(Speaker::Trainee, text)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns who wrote the message.
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if this message is from the client persona.
    pub fn is_client(&self) -> bool {
        self.speaker == Speaker::Client
    }

    /// Returns true if this message is from the trainee.
    pub fn is_trainee(&self) -> bool {
        self.speaker == Speaker::Trainee
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}

//! AI tutor chat log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The signed-in learner.
    User,
    /// The AI tutor.
    Ai,
}

/// One entry in the append-only chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// Message body.
    pub content: String,
    /// Who wrote it.
    pub sender: Sender,
    /// When it was appended.
    pub timestamp: DateTime<Utc>,
    /// Set on placeholder messages shown while the tutor is typing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typing: Option<bool>,
}

/// Caller-supplied part of a chat message; the store stamps the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatMessage {
    /// Message body.
    pub content: String,
    /// Who wrote it.
    pub sender: Sender,
    /// Typing placeholder marker.
    pub typing: Option<bool>,
}

impl NewChatMessage {
    /// A plain message from `sender`.
    #[must_use]
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender,
            typing: None,
        }
    }

    /// Marks the message as a typing placeholder.
    #[must_use]
    pub const fn typing(mut self) -> Self {
        self.typing = Some(true);
        self
    }

    pub(crate) fn stamp(self, id: Uuid, timestamp: DateTime<Utc>) -> ChatMessage {
        ChatMessage {
            id,
            content: self.content,
            sender: self.sender,
            timestamp,
            typing: self.typing,
        }
    }
}

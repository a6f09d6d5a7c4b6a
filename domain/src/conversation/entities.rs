//! Conversation log entities

use serde::{Deserialize, Serialize};

/// Originator of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Message identifier, monotonic and unique within one conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

/// A message in the conversation log (Entity)
///
/// Messages are immutable once appended; insertion order is display order
/// and is never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender: Sender::Bot,
        }
    }

    pub fn is_from_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let m = Message::user(MessageId(1), "hello");
        assert_eq!(m.sender, Sender::User);
        assert!(!m.is_from_bot());

        let m = Message::bot(MessageId(2), "hi there");
        assert_eq!(m.sender, Sender::Bot);
        assert!(m.is_from_bot());
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let m = Message::bot(MessageId(7), "answer");
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["sender"], "bot");
        assert_eq!(value["id"], 7);
        assert_eq!(value["content"], "answer");
    }
}

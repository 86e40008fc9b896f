//! Message entity - immutable chat records within a conversation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, MessageId, Timestamp};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// An immutable message within a conversation, ordered by timestamp.
///
/// The user/AI pair written by a single send-message request shares one
/// timestamp; insertion order breaks the tie for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    conversation_id: ConversationId,
    content: String,
    sender: Sender,
    timestamp: Timestamp,
}

impl Message {
    /// Creates a message with an explicit timestamp.
    pub fn new(
        conversation_id: ConversationId,
        sender: Sender,
        content: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            content: content.into(),
            sender,
            timestamp,
        }
    }

    /// Creates a user-authored message.
    pub fn user(
        conversation_id: ConversationId,
        content: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self::new(conversation_id, Sender::User, content, timestamp)
    }

    /// Creates an AI-authored message.
    pub fn ai(
        conversation_id: ConversationId,
        content: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self::new(conversation_id, Sender::Ai, content, timestamp)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_messages_can_share_a_timestamp() {
        let conversation_id = ConversationId::new();
        let now = Timestamp::now();
        let user = Message::user(conversation_id, "hello", now);
        let ai = Message::ai(conversation_id, "hi there", now);

        assert_eq!(user.timestamp(), ai.timestamp());
        assert_ne!(user.id(), ai.id());
    }

    #[test]
    fn sender_serializes_lowercase() {
        let message = Message::ai(ConversationId::new(), "reply", Timestamp::now());
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["sender"], "ai");
        assert_eq!(json["content"], "reply");
        assert!(json.get("conversationId").is_some());
    }
}

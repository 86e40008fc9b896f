//! HTTP DTOs for the retention flow endpoints.
//!
//! Request fields are all optional at the serde level so that presence can be
//! checked field-by-field in declaration order, producing the exact
//! `Missing required field: <name>` message for the first absent one.

use serde::{Deserialize, Serialize};

use crate::application::handlers::ConversationView;
use crate::domain::conversation::{Conversation, Message, Outcome};
use crate::domain::offer::Offer;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body for starting a conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartConversationRequest {
    pub user_id: Option<String>,
    pub subscription_id: Option<String>,
    pub reason: Option<String>,
    pub reason_text: Option<String>,
}

/// Body for sending a message into a conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub conversation_id: Option<String>,
    pub message: Option<String>,
    pub user_id: Option<String>,
}

/// Body for resolving a pending offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOfferRequest {
    pub conversation_id: Option<String>,
    pub offer_id: Option<String>,
    pub action: Option<String>,
    pub user_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Success envelope: `{"success": true, "data": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error envelope: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Conversation record merged with its message list (start response).
#[derive(Debug, Clone, Serialize)]
pub struct ConversationWithMessages {
    #[serde(flatten)]
    pub conversation: Conversation,
    pub messages: Vec<Message>,
}

/// Send-message response data: the AI reply plus an offer when one triggered.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageData {
    pub message: Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<Offer>,
}

/// Resolve-offer response data.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveOfferData {
    pub outcome: Outcome,
    pub message: Message,
}

/// Full conversation detail (read response).
#[derive(Debug, Clone, Serialize)]
pub struct ConversationDetail {
    #[serde(flatten)]
    pub conversation: Conversation,
    pub messages: Vec<Message>,
    pub offers: Vec<Offer>,
}

impl From<ConversationView> for ConversationDetail {
    fn from(view: ConversationView) -> Self {
        Self {
            conversation: view.conversation,
            messages: view.messages,
            offers: view.offers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::CancelReason;
    use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};

    #[test]
    fn start_request_tolerates_missing_fields() {
        let req: StartConversationRequest = serde_json::from_str(r#"{"userId": "u-1"}"#).unwrap();
        assert_eq!(req.user_id.as_deref(), Some("u-1"));
        assert!(req.subscription_id.is_none());
        assert!(req.reason.is_none());
    }

    #[test]
    fn resolve_request_reads_camel_case_keys() {
        let json = r#"{"conversationId":"c","offerId":"o","action":"accept","userId":"u"}"#;
        let req: ResolveOfferRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.action.as_deref(), Some("accept"));
        assert_eq!(req.offer_id.as_deref(), Some("o"));
    }

    #[test]
    fn conversation_with_messages_flattens_the_record() {
        let now = Timestamp::now();
        let conversation = Conversation::new(
            UserId::new("u-1"),
            SubscriptionId::new("s-1"),
            CancelReason::Other,
            "reasons",
            now,
        );
        let message = Message::ai(conversation.id(), "hello", now);

        let body = ApiSuccess::new(ConversationWithMessages {
            conversation,
            messages: vec![message],
        });
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["status"], "active");
        assert_eq!(json["data"]["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn send_message_data_omits_absent_offer() {
        let message = Message::ai(
            crate::domain::foundation::ConversationId::new(),
            "reply",
            Timestamp::now(),
        );
        let json = serde_json::to_value(SendMessageData {
            message,
            offer: None,
        })
        .unwrap();
        assert!(json.get("offer").is_none());
    }
}

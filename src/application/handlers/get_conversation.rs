//! GetConversationHandler - side-channel read of a full conversation.

use std::sync::Arc;

use crate::domain::conversation::{Conversation, FlowError, Message};
use crate::domain::foundation::ConversationId;
use crate::domain::offer::Offer;
use crate::ports::ConversationStore;

/// Query for one conversation with its messages and offers.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub conversation_id: ConversationId,
}

/// Conversation record with messages (ascending timestamp) and offers
/// (store's native query order).
#[derive(Debug, Clone)]
pub struct ConversationView {
    pub conversation: Conversation,
    pub messages: Vec<Message>,
    pub offers: Vec<Offer>,
}

/// Reads a conversation without an ownership check; the read surface takes
/// only the conversation id.
pub struct GetConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl GetConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetConversationQuery) -> Result<ConversationView, FlowError> {
        let conversation = self
            .store
            .get_conversation(query.conversation_id)
            .await?
            .ok_or(FlowError::ConversationNotFound)?;

        let messages = self
            .store
            .get_messages_by_conversation(query.conversation_id)
            .await?;
        let offers = self
            .store
            .get_offers_by_conversation(query.conversation_id)
            .await?;

        Ok(ConversationView {
            conversation,
            messages,
            offers,
        })
    }
}

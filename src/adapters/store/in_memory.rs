//! In-memory conversation store.
//!
//! Hash maps behind async locks, one per logical table, with a per-conversation
//! message vector standing in for the secondary index. The process-local
//! default store; also what the tests run against.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::{Conversation, ConversationStatus, Message, Outcome};
use crate::domain::foundation::{ConversationId, OfferId, Timestamp};
use crate::domain::offer::{Offer, OfferStatus};
use crate::ports::{ConversationStore, StoreError};

/// In-memory implementation of [`ConversationStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    conversations: Arc<RwLock<HashMap<ConversationId, Conversation>>>,
    messages: Arc<RwLock<HashMap<ConversationId, Vec<Message>>>>,
    offers: Arc<RwLock<HashMap<OfferId, Offer>>>,
}

impl InMemoryConversationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.conversations.write().await.clear();
        self.messages.write().await.clear();
        self.offers.write().await.clear();
    }

    /// Total number of stored conversations.
    pub async fn conversation_count(&self) -> usize {
        self.conversations.read().await.len()
    }

    /// Total number of stored offers across all conversations.
    pub async fn offer_count(&self) -> usize {
        self.offers.read().await.len()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, StoreError> {
        Ok(self.conversations.read().await.get(&id).cloned())
    }

    async fn put_conversation(&self, conversation: &Conversation) -> Result<(), StoreError> {
        self.conversations
            .write()
            .await
            .insert(conversation.id(), conversation.clone());
        Ok(())
    }

    async fn update_conversation_status(
        &self,
        id: ConversationId,
        status: ConversationStatus,
        outcome: Option<Outcome>,
        updated_at: Timestamp,
    ) -> Result<(), StoreError> {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations
            .get_mut(&id)
            .ok_or_else(|| StoreError::missing_record(id))?;
        conversation.set_status(status, outcome, updated_at);
        Ok(())
    }

    async fn touch_conversation(
        &self,
        id: ConversationId,
        updated_at: Timestamp,
    ) -> Result<(), StoreError> {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations
            .get_mut(&id)
            .ok_or_else(|| StoreError::missing_record(id))?;
        conversation.touch(updated_at);
        Ok(())
    }

    async fn get_messages_by_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Vec<Message>, StoreError> {
        let messages = self.messages.read().await;
        let mut result = messages.get(&id).cloned().unwrap_or_default();
        // Stable sort keeps insertion order for same-timestamp message pairs.
        result.sort_by_key(Message::timestamp);
        Ok(result)
    }

    async fn put_message(&self, message: &Message) -> Result<(), StoreError> {
        self.messages
            .write()
            .await
            .entry(message.conversation_id())
            .or_default()
            .push(message.clone());
        Ok(())
    }

    async fn count_messages_by_conversation(
        &self,
        id: ConversationId,
    ) -> Result<usize, StoreError> {
        Ok(self
            .messages
            .read()
            .await
            .get(&id)
            .map_or(0, Vec::len))
    }

    async fn get_offers_by_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Vec<Offer>, StoreError> {
        Ok(self
            .offers
            .read()
            .await
            .values()
            .filter(|offer| offer.conversation_id() == id)
            .cloned()
            .collect())
    }

    async fn get_offer(&self, id: OfferId) -> Result<Option<Offer>, StoreError> {
        Ok(self.offers.read().await.get(&id).cloned())
    }

    async fn put_offer(&self, offer: &Offer) -> Result<(), StoreError> {
        self.offers.write().await.insert(offer.id(), offer.clone());
        Ok(())
    }

    async fn update_offer_status(
        &self,
        id: OfferId,
        status: OfferStatus,
        updated_at: Timestamp,
    ) -> Result<(), StoreError> {
        let mut offers = self.offers.write().await;
        let offer = offers
            .get_mut(&id)
            .ok_or_else(|| StoreError::missing_record(id))?;
        offer.set_status(status, updated_at);
        Ok(())
    }
}

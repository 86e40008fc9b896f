//! Conversation store port.
//!
//! Contract for the external key-value/document store holding conversations,
//! messages, and offers. Single-key reads/writes plus one secondary-index
//! query per table; no transactions, so multi-record updates in the handlers
//! are independent writes with no atomicity guarantee.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::{Conversation, ConversationStatus, Message, Outcome};
use crate::domain::foundation::{ConversationId, OfferId, Timestamp};
use crate::domain::offer::{Offer, OfferStatus};

/// Store transport/backend failure. Callers treat every variant uniformly as
/// an internal error; detail is for logs only.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),

    /// Partial update addressed a record that is not there.
    #[error("record missing for partial update: {0}")]
    MissingRecord(String),
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend(message.into())
    }

    pub fn missing_record(id: impl ToString) -> Self {
        StoreError::MissingRecord(id.to_string())
    }
}

/// Persistence operations for the three retention-flow tables.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Fetch a conversation by primary key.
    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, StoreError>;

    /// Unconditional upsert of a conversation record.
    async fn put_conversation(&self, conversation: &Conversation) -> Result<(), StoreError>;

    /// Partial update: status, outcome, and `updated_at` in one write.
    async fn update_conversation_status(
        &self,
        id: ConversationId,
        status: ConversationStatus,
        outcome: Option<Outcome>,
        updated_at: Timestamp,
    ) -> Result<(), StoreError>;

    /// Partial update: `updated_at` only.
    async fn touch_conversation(
        &self,
        id: ConversationId,
        updated_at: Timestamp,
    ) -> Result<(), StoreError>;

    /// All messages for a conversation, ascending by timestamp. The user/AI
    /// pair of one exchange shares a timestamp; insertion order is preserved
    /// for the tie.
    async fn get_messages_by_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Vec<Message>, StoreError>;

    /// Append a message record.
    async fn put_message(&self, message: &Message) -> Result<(), StoreError>;

    /// Count of messages for a conversation, independent of ordering.
    async fn count_messages_by_conversation(
        &self,
        id: ConversationId,
    ) -> Result<usize, StoreError>;

    /// All offers for a conversation. Order unspecified.
    async fn get_offers_by_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Vec<Offer>, StoreError>;

    /// Fetch an offer by primary key.
    async fn get_offer(&self, id: OfferId) -> Result<Option<Offer>, StoreError>;

    /// Unconditional upsert of an offer record.
    async fn put_offer(&self, offer: &Offer) -> Result<(), StoreError>;

    /// Partial update: offer status and `updated_at`.
    async fn update_offer_status(
        &self,
        id: OfferId,
        status: OfferStatus,
        updated_at: Timestamp,
    ) -> Result<(), StoreError>;
}

//! StartConversationHandler - opens a retention conversation.

use std::sync::Arc;

use crate::domain::conversation::{CancelReason, Conversation, FlowError, Message};
use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};
use crate::domain::responder::Responder;
use crate::ports::ConversationStore;

/// Command to start a new retention conversation.
#[derive(Debug, Clone)]
pub struct StartConversationCommand {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
    pub reason: CancelReason,
    pub reason_text: String,
}

/// Result of a successful start: the new conversation and its first AI message.
#[derive(Debug, Clone)]
pub struct StartConversationResult {
    pub conversation: Conversation,
    pub message: Message,
}

/// Creates a conversation and its scripted opening message.
///
/// Every call creates a fresh conversation; there is no reuse or
/// deduplication of in-flight conversations for the same subscription.
pub struct StartConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl StartConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartConversationCommand,
    ) -> Result<StartConversationResult, FlowError> {
        let now = Timestamp::now();
        let conversation = Conversation::new(
            cmd.user_id,
            cmd.subscription_id,
            cmd.reason,
            cmd.reason_text,
            now,
        );

        let opening = Responder::initial_reply(conversation.reason(), conversation.reason_text());
        let message = Message::ai(conversation.id(), opening, now);

        self.store.put_conversation(&conversation).await?;
        self.store.put_message(&message).await?;

        Ok(StartConversationResult {
            conversation,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryConversationStore;
    use crate::domain::conversation::{ConversationStatus, Sender};
    use crate::ports::StoreError;

    fn command(reason: CancelReason, reason_text: &str) -> StartConversationCommand {
        StartConversationCommand {
            user_id: UserId::new("user-1"),
            subscription_id: SubscriptionId::new("sub-1"),
            reason,
            reason_text: reason_text.to_string(),
        }
    }

    #[tokio::test]
    async fn starts_an_active_conversation_with_one_ai_message() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = StartConversationHandler::new(store.clone());

        let result = handler
            .handle(command(CancelReason::TooExpensive, "too costly"))
            .await
            .unwrap();

        assert_eq!(result.conversation.status(), ConversationStatus::Active);
        assert_eq!(result.conversation.outcome(), None);
        assert_eq!(result.message.sender(), Sender::Ai);
        assert_eq!(
            result.message.conversation_id(),
            result.conversation.id()
        );

        let stored = store
            .get_messages_by_conversation(result.conversation.id())
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn opening_message_uses_the_reason_template() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = StartConversationHandler::new(store);

        let result = handler
            .handle(command(CancelReason::TooExpensive, "too costly"))
            .await
            .unwrap();

        assert_eq!(
            result.message.content(),
            "I understand that cost is a concern. Let me see what special offers I can provide to make this more affordable for you."
        );
    }

    #[tokio::test]
    async fn every_call_creates_a_new_conversation() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = StartConversationHandler::new(store.clone());

        let first = handler
            .handle(command(CancelReason::NotUsing, "no time"))
            .await
            .unwrap();
        let second = handler
            .handle(command(CancelReason::NotUsing, "no time"))
            .await
            .unwrap();

        assert_ne!(first.conversation.id(), second.conversation.id());
        assert_eq!(store.conversation_count().await, 2);
    }

    struct FailingStore;

    #[async_trait::async_trait]
    impl ConversationStore for FailingStore {
        async fn get_conversation(
            &self,
            _id: crate::domain::foundation::ConversationId,
        ) -> Result<Option<Conversation>, StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn put_conversation(&self, _conversation: &Conversation) -> Result<(), StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn update_conversation_status(
            &self,
            _id: crate::domain::foundation::ConversationId,
            _status: ConversationStatus,
            _outcome: Option<crate::domain::conversation::Outcome>,
            _updated_at: Timestamp,
        ) -> Result<(), StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn touch_conversation(
            &self,
            _id: crate::domain::foundation::ConversationId,
            _updated_at: Timestamp,
        ) -> Result<(), StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn get_messages_by_conversation(
            &self,
            _id: crate::domain::foundation::ConversationId,
        ) -> Result<Vec<Message>, StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn put_message(&self, _message: &Message) -> Result<(), StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn count_messages_by_conversation(
            &self,
            _id: crate::domain::foundation::ConversationId,
        ) -> Result<usize, StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn get_offers_by_conversation(
            &self,
            _id: crate::domain::foundation::ConversationId,
        ) -> Result<Vec<crate::domain::offer::Offer>, StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn get_offer(
            &self,
            _id: crate::domain::foundation::OfferId,
        ) -> Result<Option<crate::domain::offer::Offer>, StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn put_offer(&self, _offer: &crate::domain::offer::Offer) -> Result<(), StoreError> {
            Err(StoreError::backend("down"))
        }

        async fn update_offer_status(
            &self,
            _id: crate::domain::foundation::OfferId,
            _status: crate::domain::offer::OfferStatus,
            _updated_at: Timestamp,
        ) -> Result<(), StoreError> {
            Err(StoreError::backend("down"))
        }
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_store_error() {
        let handler = StartConversationHandler::new(Arc::new(FailingStore));
        let result = handler
            .handle(command(CancelReason::Other, "reasons"))
            .await;
        assert!(matches!(result, Err(FlowError::Store(_))));
    }
}

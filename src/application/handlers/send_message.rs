//! SendMessageHandler - appends a user/AI exchange and maybe an offer.

use std::sync::Arc;

use crate::domain::conversation::{FlowError, Message};
use crate::domain::foundation::{ConversationId, Timestamp, UserId};
use crate::domain::offer::{Offer, OfferGenerator};
use crate::domain::responder::Responder;
use crate::ports::ConversationStore;

/// Command carrying one user message into an existing conversation.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub conversation_id: ConversationId,
    pub message: String,
    pub user_id: UserId,
}

/// The AI reply, plus a retention offer when this exchange triggered one.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub message: Message,
    pub offer: Option<Offer>,
}

/// Persists the user message, generates and persists the scripted reply under
/// the same timestamp, and occasionally attaches a retention offer.
pub struct SendMessageHandler {
    store: Arc<dyn ConversationStore>,
    responder: Responder,
    offer_generator: OfferGenerator,
}

impl SendMessageHandler {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        responder: Responder,
        offer_generator: OfferGenerator,
    ) -> Self {
        Self {
            store,
            responder,
            offer_generator,
        }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, FlowError> {
        // Absent and not-owned look identical to the caller.
        let conversation = self
            .store
            .get_conversation(cmd.conversation_id)
            .await?
            .filter(|c| c.is_owned_by(&cmd.user_id))
            .ok_or(FlowError::ConversationNotFound)?;

        // Offer eligibility counts the messages that existed before this
        // exchange, so the count is taken ahead of the writes below.
        let prior_count = self
            .store
            .count_messages_by_conversation(cmd.conversation_id)
            .await?;

        // One timestamp for the pair; insertion order breaks the tie.
        let now = Timestamp::now();
        let user_message = Message::user(cmd.conversation_id, &cmd.message, now);
        self.store.put_message(&user_message).await?;

        let reply = self.responder.reply_to(&cmd.message);
        let ai_message = Message::ai(cmd.conversation_id, reply, now);
        self.store.put_message(&ai_message).await?;

        let offer = if self.responder.should_offer_retention(prior_count, &cmd.message) {
            let offer = self
                .offer_generator
                .generate(cmd.conversation_id, conversation.reason(), now);
            self.store.put_offer(&offer).await?;
            Some(offer)
        } else {
            None
        };

        self.store.touch_conversation(cmd.conversation_id, now).await?;

        Ok(SendMessageResult {
            message: ai_message,
            offer,
        })
    }
}

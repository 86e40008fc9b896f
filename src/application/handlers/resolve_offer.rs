//! ResolveOfferHandler - terminal accept/reject step of the flow.

use std::sync::Arc;

use crate::domain::conversation::{ConversationStatus, FlowError, Message, Outcome};
use crate::domain::foundation::{ConversationId, OfferId, Timestamp, UserId};
use crate::domain::offer::{OfferAction, OfferStatus};
use crate::domain::responder::Responder;
use crate::ports::ConversationStore;

/// Command resolving a pending offer.
#[derive(Debug, Clone)]
pub struct ResolveOfferCommand {
    pub conversation_id: ConversationId,
    pub offer_id: OfferId,
    pub action: OfferAction,
    pub user_id: UserId,
}

/// The conversation outcome and the closing AI message.
#[derive(Debug, Clone)]
pub struct ResolveOfferResult {
    pub outcome: Outcome,
    pub message: Message,
}

/// Resolves an offer and closes out its conversation.
///
/// The offer update, conversation close-out, and closing message are three
/// independent writes; a failure partway through leaves the earlier writes in
/// place with no compensation.
pub struct ResolveOfferHandler {
    store: Arc<dyn ConversationStore>,
    responder: Responder,
}

impl ResolveOfferHandler {
    pub fn new(store: Arc<dyn ConversationStore>, responder: Responder) -> Self {
        Self { store, responder }
    }

    pub async fn handle(&self, cmd: ResolveOfferCommand) -> Result<ResolveOfferResult, FlowError> {
        self.store
            .get_conversation(cmd.conversation_id)
            .await?
            .filter(|c| c.is_owned_by(&cmd.user_id))
            .ok_or(FlowError::ConversationNotFound)?;

        let offer = self
            .store
            .get_offer(cmd.offer_id)
            .await?
            .filter(|o| o.conversation_id() == cmd.conversation_id)
            .ok_or(FlowError::OfferNotFound)?;

        if !offer.is_pending() {
            return Err(FlowError::OfferUnavailable);
        }

        let now = Timestamp::now();
        let (offer_status, outcome) = match cmd.action {
            OfferAction::Accept => (OfferStatus::Accepted, Outcome::Retained),
            OfferAction::Reject => (OfferStatus::Rejected, Outcome::Cancelled),
        };

        self.store
            .update_offer_status(cmd.offer_id, offer_status, now)
            .await?;
        self.store
            .update_conversation_status(
                cmd.conversation_id,
                ConversationStatus::Completed,
                Some(outcome),
                now,
            )
            .await?;

        let closing = self.responder.closing_reply(cmd.action, &offer);
        let message = Message::ai(cmd.conversation_id, closing, now);
        self.store.put_message(&message).await?;

        Ok(ResolveOfferResult { outcome, message })
    }
}

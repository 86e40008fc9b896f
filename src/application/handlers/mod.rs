//! Request handlers orchestrating the store, responder, and offer generator.
//!
//! Handlers are stateless across requests; all state lives behind the
//! [`crate::ports::ConversationStore`] port. Multi-record updates are
//! independent writes with no atomicity guarantee, matching the store model.

mod get_conversation;
mod resolve_offer;
mod send_message;
mod start_conversation;

pub use get_conversation::{ConversationView, GetConversationHandler, GetConversationQuery};
pub use resolve_offer::{ResolveOfferCommand, ResolveOfferHandler, ResolveOfferResult};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
pub use start_conversation::{
    StartConversationCommand, StartConversationHandler, StartConversationResult,
};

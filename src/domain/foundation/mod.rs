//! Foundation value objects shared across the domain.

mod ids;
mod timestamp;

pub use ids::{ConversationId, MessageId, OfferId, SubscriptionId, UserId};
pub use timestamp::Timestamp;

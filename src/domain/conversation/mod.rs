//! Conversation domain - the cancellation-flow session and its messages.

mod conversation;
mod errors;
mod message;
mod reason;

pub use conversation::{Conversation, ConversationStatus, Outcome};
pub use errors::FlowError;
pub use message::{Message, Sender};
pub use reason::CancelReason;

//! Ports - trait contracts between the domain and the outside world.

mod conversation_store;
mod random_source;

pub use conversation_store::{ConversationStore, StoreError};
pub use random_source::RandomSource;

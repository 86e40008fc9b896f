//! HTTP routes for the retention flow endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_conversation, resolve_offer, send_message, start_conversation, RetentionHandlers,
};

/// Creates the retention flow router with all endpoints.
pub fn conversation_routes(handlers: RetentionHandlers) -> Router {
    Router::new()
        .route("/conversations", post(start_conversation))
        .route("/conversations/:id", get(get_conversation))
        .route("/messages", post(send_message))
        .route("/offers", post(resolve_offer))
        .with_state(handlers)
}

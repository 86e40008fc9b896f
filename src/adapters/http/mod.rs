//! HTTP adapters - REST API implementation.

pub mod conversation;

pub use conversation::{conversation_routes, RetentionHandlers};

use axum::Router;

/// Top-level API router.
pub fn api_router(handlers: RetentionHandlers) -> Router {
    Router::new().nest("/api", conversation_routes(handlers))
}

//! HTTP surface for the retention flow endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::RetentionHandlers;
pub use routes::conversation_routes;

//! Domain layer - entities, value objects, and domain services.

pub mod conversation;
pub mod foundation;
pub mod offer;
pub mod responder;

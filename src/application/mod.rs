//! Application layer - one handler per retention-flow operation.

pub mod handlers;

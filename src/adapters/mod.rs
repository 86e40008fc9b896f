//! Adapters - concrete implementations of the ports plus the HTTP surface.

pub mod http;
pub mod random;
pub mod store;

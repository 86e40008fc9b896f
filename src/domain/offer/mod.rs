//! Offer domain - retention incentives proposed during a conversation.

mod catalog;
mod generator;
mod offer;

pub use generator::OfferGenerator;
pub use offer::{Offer, OfferAction, OfferDetails, OfferStatus, OfferType, Savings};

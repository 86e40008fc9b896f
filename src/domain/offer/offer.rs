//! Offer entity and its value objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, OfferId, Timestamp};

/// Kind of retention incentive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    Discount,
    Pause,
}

/// Lifecycle of an offer: pending until the user resolves it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
}

/// User's decision on a pending offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferAction {
    Accept,
    Reject,
}

impl OfferAction {
    /// Parses the caller-supplied action string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "accept" => Some(Self::Accept),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Projected savings for an offer, in the subscription currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub monthly: f64,
    pub total: f64,
}

/// Type-specific numeric fields, copied verbatim from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_months: Option<u32>,
    /// Pause length in months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_duration: Option<u32>,
}

/// A retention incentive attached to a conversation.
///
/// Created pending by the send-message flow and mutated exactly once when the
/// user accepts or rejects it. `updated_at` is only set by that resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    id: OfferId,
    conversation_id: ConversationId,
    #[serde(rename = "type")]
    offer_type: OfferType,
    title: String,
    description: String,
    savings: Savings,
    details: OfferDetails,
    terms: Vec<String>,
    expires_at: Timestamp,
    created_at: Timestamp,
    status: OfferStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<Timestamp>,
}

impl Offer {
    /// Assembles a pending offer. Use [`super::OfferGenerator`] rather than
    /// constructing offers directly.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn pending(
        conversation_id: ConversationId,
        offer_type: OfferType,
        title: impl Into<String>,
        description: impl Into<String>,
        savings: Savings,
        details: OfferDetails,
        terms: Vec<String>,
        created_at: Timestamp,
        expires_at: Timestamp,
    ) -> Self {
        Self {
            id: OfferId::new(),
            conversation_id,
            offer_type,
            title: title.into(),
            description: description.into(),
            savings,
            details,
            terms,
            expires_at,
            created_at,
            status: OfferStatus::Pending,
            updated_at: None,
        }
    }

    pub fn id(&self) -> OfferId {
        self.id
    }

    pub fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    pub fn offer_type(&self) -> OfferType {
        self.offer_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn savings(&self) -> Savings {
        self.savings
    }

    pub fn details(&self) -> OfferDetails {
        self.details
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn status(&self) -> OfferStatus {
        self.status
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    /// True while the offer can still be accepted or rejected.
    pub fn is_pending(&self) -> bool {
        self.status == OfferStatus::Pending
    }

    /// Store-level partial update of status and `updated_at`.
    pub fn set_status(&mut self, status: OfferStatus, now: Timestamp) {
        self.status = status;
        self.updated_at = Some(now);
    }
}

//! Static retention offer catalog.
//!
//! Each known cancellation reason maps to a fixed pair of candidate offers.
//! Amounts are literals, not derived from any pricing source.

use crate::domain::conversation::CancelReason;

use super::offer::{OfferDetails, OfferType, Savings};

/// Terms attached to every generated offer.
pub(crate) const TERMS: [&str; 3] = [
    "Offer valid for existing customers only",
    "Cannot be combined with other offers",
    "Subscription will auto-renew at regular price after promotional period",
];

/// One catalog candidate, materialized into an `Offer` on selection.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OfferTemplate {
    pub offer_type: OfferType,
    pub title: &'static str,
    pub description: &'static str,
    pub savings: Savings,
    pub details: OfferDetails,
}

const TOO_EXPENSIVE: [OfferTemplate; 2] = [
    OfferTemplate {
        offer_type: OfferType::Discount,
        title: "50% Off for 3 Months",
        description: "Get 50% off your subscription for the next 3 months, then continue at the regular price.",
        savings: Savings {
            monthly: 15.0,
            total: 45.0,
        },
        details: OfferDetails {
            original_price: Some(29.99),
            new_price: Some(14.99),
            free_months: None,
            pause_duration: None,
        },
    },
    OfferTemplate {
        offer_type: OfferType::Discount,
        title: "2 Months Free",
        description: "Get 2 months completely free, then resume your regular billing cycle.",
        savings: Savings {
            monthly: 30.0,
            total: 60.0,
        },
        details: OfferDetails {
            original_price: Some(29.99),
            new_price: None,
            free_months: Some(2),
            pause_duration: None,
        },
    },
];

const TECHNICAL_ISSUES: [OfferTemplate; 2] = [
    OfferTemplate {
        offer_type: OfferType::Discount,
        title: "1 Month Free + Priority Support",
        description: "Get 1 month free and priority technical support to resolve any issues.",
        savings: Savings {
            monthly: 30.0,
            total: 30.0,
        },
        details: OfferDetails {
            original_price: Some(29.99),
            new_price: None,
            free_months: Some(1),
            pause_duration: None,
        },
    },
    OfferTemplate {
        offer_type: OfferType::Pause,
        title: "Pause + Technical Resolution",
        description: "Pause your subscription while we resolve technical issues, then resume with 1 month free.",
        savings: Savings {
            monthly: 30.0,
            total: 30.0,
        },
        details: OfferDetails {
            original_price: None,
            new_price: None,
            free_months: Some(1),
            pause_duration: Some(1),
        },
    },
];

const NOT_USING: [OfferTemplate; 2] = [
    OfferTemplate {
        offer_type: OfferType::Pause,
        title: "Pause for 3 Months",
        description: "Pause your subscription for up to 3 months and resume whenever you're ready.",
        savings: Savings {
            monthly: 30.0,
            total: 90.0,
        },
        details: OfferDetails {
            original_price: None,
            new_price: None,
            free_months: None,
            pause_duration: Some(3),
        },
    },
    OfferTemplate {
        offer_type: OfferType::Discount,
        title: "70% Off for 6 Months",
        description: "Try us again at 70% off for 6 months - perfect for getting back into the habit.",
        savings: Savings {
            monthly: 21.0,
            total: 126.0,
        },
        details: OfferDetails {
            original_price: Some(29.99),
            new_price: Some(8.99),
            free_months: None,
            pause_duration: None,
        },
    },
];

const FOUND_ALTERNATIVE: [OfferTemplate; 2] = [
    OfferTemplate {
        offer_type: OfferType::Discount,
        title: "Loyalty Reward - 30% Off for 6 Months",
        description: "Stay with us and get 30% off for the next 6 months as a thank-you for your loyalty.",
        savings: Savings {
            monthly: 9.0,
            total: 54.0,
        },
        details: OfferDetails {
            original_price: Some(29.99),
            new_price: Some(20.99),
            free_months: None,
            pause_duration: None,
        },
    },
    OfferTemplate {
        offer_type: OfferType::Pause,
        title: "Pause While You Compare",
        description: "Pause your subscription for up to 2 months while you evaluate alternatives, and resume if we're still the best fit.",
        savings: Savings {
            monthly: 30.0,
            total: 60.0,
        },
        details: OfferDetails {
            original_price: None,
            new_price: None,
            free_months: None,
            pause_duration: Some(2),
        },
    },
];

const DEFAULT: [OfferTemplate; 2] = [
    OfferTemplate {
        offer_type: OfferType::Discount,
        title: "40% Off for 4 Months",
        description: "Get 40% off your subscription for the next 4 months.",
        savings: Savings {
            monthly: 12.0,
            total: 48.0,
        },
        details: OfferDetails {
            original_price: Some(29.99),
            new_price: Some(17.99),
            free_months: None,
            pause_duration: None,
        },
    },
    OfferTemplate {
        offer_type: OfferType::Pause,
        title: "Flexible Pause Option",
        description: "Pause your subscription for up to 2 months and resume when convenient.",
        savings: Savings {
            monthly: 30.0,
            total: 60.0,
        },
        details: OfferDetails {
            original_price: None,
            new_price: None,
            free_months: None,
            pause_duration: Some(2),
        },
    },
];

/// Candidate pair for a cancellation reason.
pub(crate) fn candidates_for(reason: &CancelReason) -> &'static [OfferTemplate; 2] {
    match reason {
        CancelReason::TooExpensive => &TOO_EXPENSIVE,
        CancelReason::TechnicalIssues => &TECHNICAL_ISSUES,
        CancelReason::NotUsing => &NOT_USING,
        CancelReason::FoundAlternative => &FOUND_ALTERNATIVE,
        CancelReason::Other | CancelReason::Unrecognized(_) => &DEFAULT,
    }
}

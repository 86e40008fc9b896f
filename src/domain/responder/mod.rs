//! Scripted responder - canned retention replies and the offer trigger.
//!
//! All reply text lives in fixed pools here; there is no language-model call.
//! Selection within a pool is uniform via the injected [`RandomSource`], so
//! the same input can produce different replies across calls.

mod script;

use std::sync::Arc;

use crate::domain::conversation::CancelReason;
use crate::domain::offer::{Offer, OfferAction};
use crate::ports::RandomSource;

use script::{
    ACCEPT_CLOSINGS, COMPETITOR_KEYWORDS, COMPETITOR_REPLIES, GENERIC_REPLIES, PRICING_KEYWORDS,
    PRICING_REPLIES, REJECT_CLOSINGS, TECHNICAL_KEYWORDS, TECHNICAL_REPLIES, TRIGGER_KEYWORDS,
    USAGE_KEYWORDS, USAGE_REPLIES,
};

/// Minimum messages already in the conversation before an offer can trigger.
const OFFER_MESSAGE_THRESHOLD: usize = 4;

/// Probability complement thresholds for the offer trigger draw.
const TRIGGER_WORD_DRAW: f64 = 0.2;
const BASELINE_DRAW: f64 = 0.4;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Generates the scripted AI side of the retention conversation.
#[derive(Clone)]
pub struct Responder {
    random: Arc<dyn RandomSource>,
}

impl Responder {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Reply to a user message, classified by keyword buckets in priority
    /// order: pricing, technical, usage/time, competitor, then generic.
    pub fn reply_to(&self, user_text: &str) -> String {
        let lowered = user_text.to_lowercase();

        let pool: &[&str] = if contains_any(&lowered, &PRICING_KEYWORDS) {
            &PRICING_REPLIES
        } else if contains_any(&lowered, &TECHNICAL_KEYWORDS) {
            &TECHNICAL_REPLIES
        } else if contains_any(&lowered, &USAGE_KEYWORDS) {
            &USAGE_REPLIES
        } else if contains_any(&lowered, &COMPETITOR_KEYWORDS) {
            &COMPETITOR_REPLIES
        } else {
            &GENERIC_REPLIES
        };

        pool[self.random.pick_index(pool.len())].to_string()
    }

    /// Deterministic first AI message, keyed on the cancellation reason.
    ///
    /// The `other` and unrecognized branches interpolate the user's free-text
    /// reason verbatim.
    pub fn initial_reply(reason: &CancelReason, reason_text: &str) -> String {
        match reason {
            CancelReason::TooExpensive => {
                "I understand that cost is a concern. Let me see what special offers I can provide to make this more affordable for you.".to_string()
            }
            CancelReason::NotUsing => {
                "I hear you - sometimes we sign up for things and don't use them as much as expected. Let me show you some options that might work better.".to_string()
            }
            CancelReason::TechnicalIssues => {
                "I'm sorry you're experiencing technical difficulties. Let me help resolve those issues and see what we can do to improve your experience.".to_string()
            }
            CancelReason::FoundAlternative => {
                "I understand you've found another option. Before you go, let me show you some exclusive benefits that might change your mind.".to_string()
            }
            CancelReason::Other => format!(
                "Thank you for sharing that with me: {reason_text}. I'd like to understand your concerns better and see how we can address them."
            ),
            CancelReason::Unrecognized(_) => format!(
                "I understand your concerns about: {reason_text}. Let me see what I can do to help address this situation."
            ),
        }
    }

    /// Closing AI message once an offer is resolved.
    pub fn closing_reply(&self, action: OfferAction, offer: &Offer) -> String {
        match action {
            OfferAction::Accept => {
                let title = offer.title().to_lowercase();
                let template = ACCEPT_CLOSINGS[self.random.pick_index(ACCEPT_CLOSINGS.len())];
                template.replace("{offer}", &title)
            }
            OfferAction::Reject => {
                REJECT_CLOSINGS[self.random.pick_index(REJECT_CLOSINGS.len())].to_string()
            }
        }
    }

    /// Decides whether this exchange should produce a retention offer.
    ///
    /// `prior_count` is the number of messages already persisted before the
    /// current exchange. Below the threshold the answer is always false; past
    /// it, a trigger keyword bumps the chance from ~60% to ~80%.
    pub fn should_offer_retention(&self, prior_count: usize, user_text: &str) -> bool {
        if prior_count < OFFER_MESSAGE_THRESHOLD {
            return false;
        }

        let lowered = user_text.to_lowercase();
        let draw = self.random.next_f64();

        if contains_any(&lowered, &TRIGGER_KEYWORDS) {
            draw > TRIGGER_WORD_DRAW
        } else {
            draw > BASELINE_DRAW
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::FixedRandomSource;
    use crate::domain::foundation::{ConversationId, Timestamp};
    use crate::domain::offer::OfferGenerator;
    use proptest::prelude::*;

    fn responder(draws: Vec<f64>, picks: Vec<usize>) -> Responder {
        Responder::new(Arc::new(FixedRandomSource::new(draws, picks)))
    }

    #[test]
    fn pricing_bucket_wins_over_later_buckets() {
        // "expensive" (pricing) and "problem" (technical) both present.
        let reply = responder(vec![], vec![0]).reply_to("Too expensive and a problem");
        assert_eq!(reply, PRICING_REPLIES[0]);
    }

    #[test]
    fn classification_is_case_insensitive() {
        let reply = responder(vec![], vec![1]).reply_to("TECHNICAL trouble");
        assert_eq!(reply, TECHNICAL_REPLIES[1]);
    }

    #[test]
    fn unmatched_text_uses_the_generic_pool() {
        let reply = responder(vec![], vec![3]).reply_to("just because");
        assert_eq!(reply, GENERIC_REPLIES[3]);
    }

    #[test]
    fn initial_reply_is_deterministic_for_known_reasons() {
        let first = Responder::initial_reply(&CancelReason::TooExpensive, "ignored");
        let second = Responder::initial_reply(&CancelReason::TooExpensive, "also ignored");
        assert_eq!(first, second);
        assert!(first.contains("cost is a concern"));
    }

    #[test]
    fn fallback_replies_contain_reason_text_verbatim() {
        let other = Responder::initial_reply(&CancelReason::Other, "my dog ate it");
        assert!(other.contains("my dog ate it"));

        let unknown = Responder::initial_reply(
            &CancelReason::Unrecognized("something_else".to_string()),
            "weird edge case",
        );
        assert!(unknown.contains("weird edge case"));
    }

    #[test]
    fn accept_closing_interpolates_lowercased_title() {
        let offer = OfferGenerator::new(Arc::new(FixedRandomSource::new(vec![], vec![0])))
            .generate(ConversationId::new(), &CancelReason::TooExpensive, Timestamp::now());

        let closing = responder(vec![], vec![0]).closing_reply(OfferAction::Accept, &offer);
        assert!(closing.contains("50% off for 3 months"));
    }

    #[test]
    fn reject_closing_comes_from_the_rejection_pool() {
        let offer = OfferGenerator::new(Arc::new(FixedRandomSource::new(vec![], vec![0])))
            .generate(ConversationId::new(), &CancelReason::Other, Timestamp::now());

        let closing = responder(vec![], vec![2]).closing_reply(OfferAction::Reject, &offer);
        assert_eq!(closing, REJECT_CLOSINGS[2]);
    }

    #[test]
    fn trigger_word_uses_the_lower_draw_threshold() {
        // 0.3 passes the trigger-word threshold (0.2) but not baseline (0.4).
        let with_trigger = responder(vec![0.3], vec![]);
        assert!(with_trigger.should_offer_retention(4, "it is too expensive"));

        let without_trigger = responder(vec![0.3], vec![]);
        assert!(!without_trigger.should_offer_retention(4, "just not feeling it"));
    }

    #[test]
    fn high_draw_triggers_either_way() {
        assert!(responder(vec![0.95], vec![]).should_offer_retention(10, "anything at all"));
    }

    proptest! {
        #[test]
        fn guard_is_always_false_below_threshold(count in 0usize..4, text in ".*") {
            // Even a draw of 1.0-epsilon must not matter below the threshold.
            let responder = responder(vec![0.99], vec![]);
            prop_assert!(!responder.should_offer_retention(count, &text));
        }
    }
}

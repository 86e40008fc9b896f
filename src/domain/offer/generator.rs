//! Offer generator - materializes a catalog candidate into a pending offer.

use std::sync::Arc;

use crate::domain::conversation::CancelReason;
use crate::domain::foundation::{ConversationId, Timestamp};
use crate::ports::RandomSource;

use super::catalog::{self, TERMS};
use super::offer::Offer;

/// Days until a generated offer expires.
const OFFER_VALIDITY_DAYS: i64 = 7;

/// Picks one of the two catalog candidates for a cancellation reason and
/// stamps it with identity, expiry, and terms.
#[derive(Clone)]
pub struct OfferGenerator {
    random: Arc<dyn RandomSource>,
}

impl OfferGenerator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Generates a pending offer for the conversation.
    ///
    /// Numeric fields are copied verbatim from the selected catalog entry;
    /// nothing is validated against a live pricing source.
    pub fn generate(
        &self,
        conversation_id: ConversationId,
        reason: &CancelReason,
        now: Timestamp,
    ) -> Offer {
        let candidates = catalog::candidates_for(reason);
        let template = &candidates[self.random.pick_index(candidates.len())];

        Offer::pending(
            conversation_id,
            template.offer_type,
            template.title,
            template.description,
            template.savings,
            template.details,
            TERMS.iter().map(|t| t.to_string()).collect(),
            now,
            now.plus_days(OFFER_VALIDITY_DAYS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::FixedRandomSource;
    use crate::domain::offer::{OfferStatus, OfferType};

    fn generator_picking(index: usize) -> OfferGenerator {
        OfferGenerator::new(Arc::new(FixedRandomSource::new(vec![], vec![index])))
    }

    #[test]
    fn generates_pending_offer_with_seven_day_expiry() {
        let now = Timestamp::now();
        let offer = generator_picking(0).generate(ConversationId::new(), &CancelReason::TooExpensive, now);

        assert_eq!(offer.status(), OfferStatus::Pending);
        assert_eq!(offer.created_at(), now);
        assert_eq!(offer.expires_at(), now.plus_days(7));
        assert_eq!(offer.terms().len(), 3);
    }

    #[test]
    fn selection_index_drives_the_candidate() {
        let conversation_id = ConversationId::new();
        let now = Timestamp::now();

        let first = generator_picking(0).generate(conversation_id, &CancelReason::TooExpensive, now);
        let second = generator_picking(1).generate(conversation_id, &CancelReason::TooExpensive, now);

        assert_eq!(first.title(), "50% Off for 3 Months");
        assert_eq!(second.title(), "2 Months Free");
    }

    #[test]
    fn not_using_pair_includes_a_pause_candidate() {
        let offer = generator_picking(0).generate(ConversationId::new(), &CancelReason::NotUsing, Timestamp::now());
        assert_eq!(offer.offer_type(), OfferType::Pause);
        assert_eq!(offer.details().pause_duration, Some(3));
    }
}

//! Conversation entity - one cancellation-flow session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, SubscriptionId, Timestamp, UserId};

use super::reason::CancelReason;

/// Lifecycle state of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Active,
    Completed,
}

/// Terminal result of a completed conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Retained,
    Cancelled,
}

/// One retention chat session between a user and the scripted responder.
///
/// # Invariants
///
/// - `outcome` is `None` exactly while `status` is `Active`; completing the
///   conversation sets both together.
/// - Conversations are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    id: ConversationId,
    user_id: UserId,
    subscription_id: SubscriptionId,
    status: ConversationStatus,
    outcome: Option<Outcome>,
    reason: CancelReason,
    reason_text: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Conversation {
    /// Creates a new active conversation.
    pub fn new(
        user_id: UserId,
        subscription_id: SubscriptionId,
        reason: CancelReason,
        reason_text: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: ConversationId::new(),
            user_id,
            subscription_id,
            status: ConversationStatus::Active,
            outcome: None,
            reason,
            reason_text: reason_text.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn subscription_id(&self) -> &SubscriptionId {
        &self.subscription_id
    }

    pub fn status(&self) -> ConversationStatus {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn reason(&self) -> &CancelReason {
        &self.reason
    }

    pub fn reason_text(&self) -> &str {
        &self.reason_text
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// True when the stored owner matches the caller-supplied identifier.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Store-level partial update of status, outcome, and `updated_at`.
    ///
    /// Callers are responsible for keeping status and outcome consistent
    /// (outcome set exactly when completing).
    pub fn set_status(&mut self, status: ConversationStatus, outcome: Option<Outcome>, now: Timestamp) {
        self.status = status;
        self.outcome = outcome;
        self.updated_at = now;
    }

    /// Bumps `updated_at` without any other change.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conversation() -> Conversation {
        Conversation::new(
            UserId::new("user-1"),
            SubscriptionId::new("sub-1"),
            CancelReason::TooExpensive,
            "too costly",
            Timestamp::now(),
        )
    }

    #[test]
    fn new_conversation_is_active_without_outcome() {
        let conversation = test_conversation();
        assert_eq!(conversation.status(), ConversationStatus::Active);
        assert_eq!(conversation.outcome(), None);
    }

    #[test]
    fn set_status_closes_out_the_conversation() {
        let mut conversation = test_conversation();
        let closed_at = Timestamp::now();
        conversation.set_status(
            ConversationStatus::Completed,
            Some(Outcome::Retained),
            closed_at,
        );
        assert_eq!(conversation.status(), ConversationStatus::Completed);
        assert_eq!(conversation.outcome(), Some(Outcome::Retained));
        assert_eq!(conversation.updated_at(), closed_at);
    }

    #[test]
    fn touch_only_bumps_updated_at() {
        let mut conversation = test_conversation();
        let created = conversation.created_at();
        let later = created.plus_days(1);
        conversation.touch(later);
        assert_eq!(conversation.updated_at(), later);
        assert_eq!(conversation.status(), ConversationStatus::Active);
    }

    #[test]
    fn ownership_check_compares_user_ids() {
        let conversation = test_conversation();
        assert!(conversation.is_owned_by(&UserId::new("user-1")));
        assert!(!conversation.is_owned_by(&UserId::new("someone-else")));
    }

    #[test]
    fn serializes_with_camel_case_keys_and_null_outcome() {
        let conversation = test_conversation();
        let json = serde_json::to_value(&conversation).unwrap();
        assert_eq!(json["status"], "active");
        assert!(json["outcome"].is_null());
        assert_eq!(json["reasonText"], "too costly");
        assert!(json.get("userId").is_some());
        assert!(json.get("subscriptionId").is_some());
    }
}

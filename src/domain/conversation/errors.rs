//! Error taxonomy for the retention flow.

use thiserror::Error;

use crate::ports::StoreError;

/// Errors a flow handler can surface to the HTTP boundary.
///
/// Validation is checked before any store access; store failures are collapsed
/// into `Store` and never expose backend detail to the caller.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Conversation is unknown, or owned by a different user.
    #[error("Conversation not found")]
    ConversationNotFound,

    /// Offer is unknown, or attached to a different conversation.
    #[error("Offer not found")]
    OfferNotFound,

    /// Offer already left the pending state.
    #[error("Offer is no longer available")]
    OfferUnavailable,

    /// Offer action other than accept/reject.
    #[error("Action must be \"accept\" or \"reject\"")]
    InvalidAction(String),

    /// A required request field was absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Store transport or backend failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(
            FlowError::ConversationNotFound.to_string(),
            "Conversation not found"
        );
        assert_eq!(
            FlowError::OfferUnavailable.to_string(),
            "Offer is no longer available"
        );
        assert_eq!(
            FlowError::InvalidAction("maybe".to_string()).to_string(),
            "Action must be \"accept\" or \"reject\""
        );
        assert_eq!(
            FlowError::MissingField("userId").to_string(),
            "Missing required field: userId"
        );
    }

    #[test]
    fn store_errors_convert_via_from() {
        let err: FlowError = StoreError::backend("connection reset").into();
        assert!(matches!(err, FlowError::Store(_)));
    }
}

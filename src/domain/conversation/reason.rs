//! Cancellation reason value object.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Why the user wants to cancel.
///
/// Callers may send reason strings outside the known set; those are preserved
/// verbatim rather than rejected, since the scripted responder has a fallback
/// reply for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CancelReason {
    TooExpensive,
    NotUsing,
    TechnicalIssues,
    FoundAlternative,
    Other,
    /// A reason string outside the known enum, stored as received.
    Unrecognized(String),
}

impl CancelReason {
    /// Parses a caller-supplied reason string. Never fails.
    pub fn parse(s: &str) -> Self {
        match s {
            "too_expensive" => Self::TooExpensive,
            "not_using" => Self::NotUsing,
            "technical_issues" => Self::TechnicalIssues,
            "found_alternative" => Self::FoundAlternative,
            "other" => Self::Other,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Returns the wire representation of the reason.
    pub fn as_str(&self) -> &str {
        match self {
            Self::TooExpensive => "too_expensive",
            Self::NotUsing => "not_using",
            Self::TechnicalIssues => "technical_issues",
            Self::FoundAlternative => "found_alternative",
            Self::Other => "other",
            Self::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CancelReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CancelReason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReasonVisitor;

        impl<'de> Visitor<'de> for ReasonVisitor {
            type Value = CancelReason;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a cancellation reason string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(CancelReason::parse(v))
            }
        }

        deserializer.deserialize_str(ReasonVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_reasons_parse_to_variants() {
        assert_eq!(CancelReason::parse("too_expensive"), CancelReason::TooExpensive);
        assert_eq!(CancelReason::parse("not_using"), CancelReason::NotUsing);
        assert_eq!(
            CancelReason::parse("technical_issues"),
            CancelReason::TechnicalIssues
        );
        assert_eq!(
            CancelReason::parse("found_alternative"),
            CancelReason::FoundAlternative
        );
        assert_eq!(CancelReason::parse("other"), CancelReason::Other);
    }

    #[test]
    fn unknown_reason_is_preserved_verbatim() {
        let reason = CancelReason::parse("moving_abroad");
        assert_eq!(reason, CancelReason::Unrecognized("moving_abroad".to_string()));
        assert_eq!(reason.as_str(), "moving_abroad");
    }

    #[test]
    fn reason_roundtrips_through_json() {
        let reason: CancelReason = serde_json::from_str("\"too_expensive\"").unwrap();
        assert_eq!(reason, CancelReason::TooExpensive);
        assert_eq!(serde_json::to_string(&reason).unwrap(), "\"too_expensive\"");

        let unknown: CancelReason = serde_json::from_str("\"sold_my_tv\"").unwrap();
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"sold_my_tv\"");
    }
}

//! Tarot reading records: paid reading requests and pick-a-card sessions.

use serde::{Deserialize, Serialize};

use crate::define_literal_enum;

define_literal_enum! {
    /// Paid reading package tier.
    ReadingPackage {
        Mini => "mini",
        Standard => "standard",
        Deep => "deep",
    }
}

define_literal_enum! {
    /// Fulfillment status of a paid reading.
    ReadingStatus {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
    }
}

impl Default for ReadingStatus {
    fn default() -> Self {
        ReadingStatus::Pending
    }
}

/// A paid reading request submitted by a client.
///
/// `status` is only ever set here, at creation; nothing transitions it later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidReading {
    /// Client name
    pub name: String,
    /// Client email for delivery
    pub email: String,
    /// Client question or focus area
    pub question: String,
    /// Selected package tier
    pub package: ReadingPackage,
    /// Fulfillment status
    #[serde(default)]
    pub status: ReadingStatus,
}

/// A pick-a-card session. Card names are free text and keep their order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingSession {
    /// User intention or prompt
    #[serde(default)]
    pub prompt: Option<String>,
    /// List of card names picked
    pub picked_cards: Vec<String>,
    /// Optional interpretation notes
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_defaults_to_pending() {
        let reading: PaidReading = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "question": "Career?",
            "package": "standard"
        }))
        .unwrap();

        assert_eq!(reading.status, ReadingStatus::Pending);
        assert_eq!(reading.status.to_string(), "pending");
    }

    #[test]
    fn test_in_progress_literal() {
        assert_eq!(ReadingStatus::InProgress.as_str(), "in_progress");
        assert_eq!(
            "in_progress".parse::<ReadingStatus>().unwrap(),
            ReadingStatus::InProgress
        );
    }

    #[test]
    fn test_unknown_package_is_rejected() {
        let err = serde_json::from_value::<PaidReading>(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "question": "Career?",
            "package": "premium"
        }))
        .unwrap_err();

        assert!(err.to_string().contains("premium"));
    }

    #[test]
    fn test_picked_cards_required() {
        let result = serde_json::from_value::<ReadingSession>(json!({ "prompt": "Love" }));
        assert!(result.unwrap_err().to_string().contains("picked_cards"));
    }

    #[test]
    fn test_picked_cards_order_preserved() {
        let session: ReadingSession = serde_json::from_value(json!({
            "picked_cards": ["The Tower", "The Fool", "The Star"]
        }))
        .unwrap();

        assert_eq!(
            session.picked_cards,
            vec!["The Tower", "The Fool", "The Star"]
        );
        assert!(session.prompt.is_none());
        assert!(session.notes.is_none());
    }
}

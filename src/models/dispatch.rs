use crate::markup::{hdml_to_markdown, strip_tags};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// In-game news message as served by `/api/v1/dispatches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: i64,
    pub published: DateTime<Utc>,
    #[serde(rename = "type", default)]
    pub dispatch_type: i32,
    #[serde(default)]
    pub message: String,
}

impl Dispatch {
    /// Message with all markup removed.
    pub fn as_plaintext(&self) -> String {
        strip_tags(&self.message)
    }

    /// Message with HDML converted to console markup.
    pub fn as_markdown(&self) -> String {
        hdml_to_markdown(&self.message)
    }
}

/// Sort order for dispatch listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_deserialization() {
        let json = r#"{
            "id": 2797,
            "published": "2024-04-05T12:30:00Z",
            "type": 0,
            "message": "<i=3>SUPER EARTH</i=3> needs you"
        }"#;

        let dispatch: Dispatch = serde_json::from_str(json).unwrap();
        assert_eq!(dispatch.id, 2797);
        assert_eq!(dispatch.dispatch_type, 0);
        assert_eq!(dispatch.published.to_rfc3339(), "2024-04-05T12:30:00+00:00");
        assert_eq!(dispatch.as_plaintext(), "SUPER EARTH needs you");
        assert_eq!(dispatch.as_markdown(), "[b]SUPER EARTH[b] needs you");
    }

    #[test]
    fn test_dispatch_missing_message_defaults_to_empty() {
        let json = r#"{"id": 1, "published": "2024-04-05T12:30:00Z"}"#;
        let dispatch: Dispatch = serde_json::from_str(json).unwrap();
        assert!(dispatch.message.is_empty());
        assert_eq!(dispatch.as_plaintext(), "");
    }

    #[test]
    fn test_dispatch_order_default() {
        assert_eq!(DispatchOrder::default(), DispatchOrder::OldestFirst);
    }
}

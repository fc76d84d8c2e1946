use crate::constants::date_formats;
use crate::markup::strip_tags;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Patch note entry from the Diveharder `v1/updates` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub contents: String,
    /// Publication date as sent by the API (RFC 3339 or `05-Apr-2024 14:30`).
    #[serde(default)]
    pub date: String,
}

impl Update {
    /// Publication date, if it is in one of the known formats.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_update_date(&self.date)
    }

    pub fn contents_plaintext(&self) -> String {
        strip_tags(&self.contents)
    }
}

/// Parses an update date in either RFC 3339 (normalized to UTC) or `%d-%b-%Y %H:%M`.
pub fn parse_update_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc).naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, date_formats::UPDATE_LOOKUP).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expected() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_update_date_formats() {
        assert_eq!(parse_update_date("05-Apr-2024 14:30"), Some(expected()));
        assert_eq!(parse_update_date("2024-04-05T14:30:00Z"), Some(expected()));
        assert_eq!(parse_update_date("2024-04-05T16:30:00+02:00"), Some(expected()));
        assert_eq!(parse_update_date("yesterday"), None);
        assert_eq!(parse_update_date(""), None);
    }

    #[test]
    fn test_update_deserialization() {
        let json = r#"{
            "title": "Escalation of Freedom",
            "url": "https://store.steampowered.com/news/app/553850/view/1",
            "contents": "<b>New</b> enemies",
            "date": "05-Apr-2024 14:30"
        }"#;

        let update: Update = serde_json::from_str(json).unwrap();
        assert_eq!(update.parsed_date(), Some(expected()));
        assert_eq!(update.contents_plaintext(), "New enemies");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Patch notes / announcements mirrored from Steam by `/api/v1/steam`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteamNews {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steam_news_deserialization() {
        let json = r#"{
            "id": "5761012345678901234",
            "title": "Patch 01.000.200",
            "url": "https://store.steampowered.com/news/app/553850/view/5761012345678901234",
            "author": "Arrowhead",
            "content": "[h1]Fixes[/h1]",
            "publishedAt": "2024-03-28T09:00:00Z"
        }"#;

        let news: SteamNews = serde_json::from_str(json).unwrap();
        assert_eq!(news.id, "5761012345678901234");
        assert_eq!(news.author, "Arrowhead");
        assert_eq!(news.published_at.to_rfc3339(), "2024-03-28T09:00:00+00:00");
    }
}

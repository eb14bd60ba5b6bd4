//! JSON representation of a link shared by several endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;
use crate::routes::RESOLVE_PREFIX;

/// A link as returned by the shorten, stats and listing endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl LinkResponse {
    /// Builds the response for `link`, forming its short URL from `base_url`.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        Self {
            short_url: short_url(base_url, &link.code),
            short_code: link.code,
            original_url: link.original_url,
            clicks: link.clicks,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}

/// Public short URL: configured base address, resolve prefix, code.
pub fn short_url(base_url: &str, code: &str) -> String {
    format!("{}{}/{}", base_url.trim_end_matches('/'), RESOLVE_PREFIX, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_url() {
        assert_eq!(
            short_url("https://s.example.com", "abc1234"),
            "https://s.example.com/r/abc1234"
        );
        assert_eq!(
            short_url("http://localhost:3001/", "abc1234"),
            "http://localhost:3001/r/abc1234"
        );
    }

    #[test]
    fn test_link_response_serializes_camel_case() {
        let created_at = Utc::now();
        let link = Link::new(
            "abc1234".to_string(),
            "https://example.com".to_string(),
            5,
            created_at,
            None,
        );

        let value = serde_json::to_value(LinkResponse::from_link(link, "https://s.io")).unwrap();

        assert_eq!(value["shortUrl"], "https://s.io/r/abc1234");
        assert_eq!(value["shortCode"], "abc1234");
        assert_eq!(value["originalUrl"], "https://example.com");
        assert_eq!(value["clicks"], 5);
        assert_eq!(value["expiresAt"], json!(null));
        assert!(value["createdAt"].is_string());
    }
}

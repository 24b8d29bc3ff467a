//! Wire bodies of the backend HTTP contract.

use serde::{Deserialize, Serialize};

/// Body of `POST /shorten_url`.
#[derive(Debug, Serialize)]
pub struct ShortenRequest<'a> {
    pub long_url: &'a str,
}

/// Success body of `POST /shorten_url`.
///
/// Older backends answer with `shortUrl`; `short_url` wins when both are set.
#[derive(Debug, Deserialize)]
pub struct ShortenResponse {
    #[serde(default)]
    pub short_url: Option<String>,

    #[serde(default, rename = "shortUrl")]
    pub legacy_short_url: Option<String>,
}

impl ShortenResponse {
    pub fn into_short_url(self) -> Option<String> {
        self.short_url
            .filter(|s| !s.trim().is_empty())
            .or(self.legacy_short_url)
    }
}

/// Success body of `GET /fetch_url/{key}`.
#[derive(Debug, Deserialize)]
pub struct FetchResponse {
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_request_field_name() {
        let body = serde_json::to_value(ShortenRequest {
            long_url: "https://example.com",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "long_url": "https://example.com" }));
    }

    #[test]
    fn test_shorten_response_snake_case() {
        let response: ShortenResponse =
            serde_json::from_str(r#"{"short_url":"abc123"}"#).unwrap();
        assert_eq!(response.into_short_url().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_shorten_response_legacy_alias() {
        let response: ShortenResponse = serde_json::from_str(r#"{"shortUrl":"abc123"}"#).unwrap();
        assert_eq!(response.into_short_url().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_shorten_response_prefers_snake_case() {
        let response: ShortenResponse =
            serde_json::from_str(r#"{"short_url":"new","shortUrl":"old"}"#).unwrap();
        assert_eq!(response.into_short_url().as_deref(), Some("new"));
    }

    #[test]
    fn test_shorten_response_empty_snake_case_falls_back() {
        let response: ShortenResponse =
            serde_json::from_str(r#"{"short_url":"","shortUrl":"old"}"#).unwrap();
        assert_eq!(response.into_short_url().as_deref(), Some("old"));
    }

    #[test]
    fn test_shorten_response_missing_both() {
        let response: ShortenResponse = serde_json::from_str(r#"{"other":1}"#).unwrap();
        assert!(response.into_short_url().is_none());
    }

    #[test]
    fn test_fetch_response() {
        let response: FetchResponse =
            serde_json::from_str(r#"{"long_url":"https://example.com/a"}"#).unwrap();
        assert_eq!(response.long_url, "https://example.com/a");
    }
}

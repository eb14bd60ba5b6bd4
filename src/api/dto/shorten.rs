//! DTOs for link shortening endpoint.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, PickFirst, serde_as};
use validator::Validate;

/// Longest expiry a client may request, in days.
pub const MAX_EXPIRY_DAYS: i64 = 36_500;

/// Request to shorten one URL.
///
/// The target may be sent as `url` or `originalUrl`. `expiryDays` may be a
/// number or a numeric string; an empty string means no expiry, as do zero
/// and negative values.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten. Syntax is checked by the link service.
    #[serde(alias = "originalUrl")]
    #[validate(length(min = 1, max = 8192, message = "URL is required"))]
    pub url: String,

    /// Optional lifetime in days; the link answers 410 Gone afterwards.
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(default)]
    #[validate(range(max = MAX_EXPIRY_DAYS))]
    pub expiry_days: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ShortenRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_accepts_url_field() {
        let req = parse(r#"{"url": "https://example.com", "expiryDays": 7}"#);

        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.expiry_days, Some(7));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_accepts_original_url_alias() {
        let req = parse(r#"{"originalUrl": "https://example.com"}"#);

        assert_eq!(req.url, "https://example.com");
        assert!(req.expiry_days.is_none());
    }

    #[test]
    fn test_expiry_days_from_form_strings() {
        assert_eq!(
            parse(r#"{"url": "https://a.io", "expiryDays": "7"}"#).expiry_days,
            Some(7)
        );
        assert_eq!(
            parse(r#"{"url": "https://a.io", "expiryDays": ""}"#).expiry_days,
            None
        );
        assert_eq!(
            parse(r#"{"url": "https://a.io", "expiryDays": null}"#).expiry_days,
            None
        );
    }

    #[test]
    fn test_non_positive_expiry_passes_validation() {
        let zero = parse(r#"{"url": "https://a.io", "expiryDays": 0}"#);
        assert_eq!(zero.expiry_days, Some(0));
        assert!(zero.validate().is_ok());

        let negative = parse(r#"{"url": "https://a.io", "expiryDays": "-3"}"#);
        assert_eq!(negative.expiry_days, Some(-3));
        assert!(negative.validate().is_ok());
    }

    #[test]
    fn test_rejects_garbage_expiry() {
        let result =
            serde_json::from_str::<ShortenRequest>(r#"{"url": "https://a.io", "expiryDays": "soon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_url_and_huge_expiry() {
        assert!(parse(r#"{"url": ""}"#).validate().is_err());

        let at_limit = ShortenRequest {
            url: "https://a.io".to_string(),
            expiry_days: Some(MAX_EXPIRY_DAYS),
        };
        assert!(at_limit.validate().is_ok());

        let huge = ShortenRequest {
            url: "https://a.io".to_string(),
            expiry_days: Some(MAX_EXPIRY_DAYS + 1),
        };
        assert!(huge.validate().is_err());
    }
}

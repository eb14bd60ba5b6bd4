//! Syntactic validation of URLs submitted for shortening.
//!
//! Only the grammar is checked. The input is never rewritten: what the client
//! sent is what gets stored and what the redirect points to.

use url::Url;

/// Reasons a URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute URL with a scheme and an authority.
///
/// # Rules
///
/// 1. **Non-empty**: whitespace-only input is rejected
/// 2. **Absolute**: must parse on its own, without a base URL
/// 3. **Authority**: must carry a host (rejects `mailto:`, `data:`,
///    `javascript:` and other opaque forms)
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::InvalidFormat`] for unparsable input and
/// [`UrlValidationError::MissingHost`] for URLs without an authority.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/a/b?c=1").is_ok());
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_with_path_and_query() {
        assert!(validate_url("https://example.com/a/b?c=1").is_ok());
    }

    #[test]
    fn test_validate_custom_port_and_ip() {
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_url("http://localhost:3000/test").is_ok());
        assert!(validate_url("http://[::1]:8080/").is_ok());
    }

    #[test]
    fn test_validate_non_http_scheme_with_authority() {
        assert!(validate_url("ftp://example.com/file.txt").is_ok());
    }

    #[test]
    fn test_validate_unicode_domain() {
        assert!(validate_url("https://münchen.de").is_ok());
    }

    #[test]
    fn test_validate_not_a_url() {
        assert!(matches!(
            validate_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_no_scheme() {
        assert!(matches!(
            validate_url("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_empty_and_blank() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_validate_opaque_schemes_rejected() {
        assert_eq!(
            validate_url("mailto:test@example.com"),
            Err(UrlValidationError::MissingHost)
        );
        assert_eq!(
            validate_url("javascript:alert('xss')"),
            Err(UrlValidationError::MissingHost)
        );
        assert_eq!(
            validate_url("data:text/plain,Hello"),
            Err(UrlValidationError::MissingHost)
        );
    }

    #[test]
    fn test_validate_file_url_without_host() {
        assert_eq!(
            validate_url("file:///home/user/document.txt"),
            Err(UrlValidationError::MissingHost)
        );
    }

    #[test]
    fn test_validate_very_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(2000));
        assert!(validate_url(&url).is_ok());
    }
}

//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its usage counter and lifetime metadata.
///
/// Only `clicks` ever changes after creation, and only through
/// [`crate::domain::repositories::LinkRepository::increment_clicks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        original_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code,
            original_url,
            clicks,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the link's deadline is strictly earlier than `now`.
    ///
    /// Links without an expiry never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for creating a new link.
///
/// `created_at` is fixed by the caller so that `expires_at` can be derived
/// from the exact same instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewLink {
    /// The stored representation of this input: a fresh link with zero clicks.
    pub fn into_link(self) -> Link {
        Link::new(
            self.code,
            self.original_url,
            0,
            self.created_at,
            self.expires_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link_expiring(expires_at: Option<DateTime<Utc>>) -> Link {
        Link::new(
            "abc1234".to_string(),
            "https://example.com".to_string(),
            0,
            Utc::now(),
            expires_at,
        )
    }

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc1234".to_string(),
            "https://example.com".to_string(),
            3,
            now,
            None,
        );

        assert_eq!(link.code, "abc1234");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.clicks, 3);
        assert_eq!(link.created_at, now);
        assert!(!link.is_expired());
    }

    #[test]
    fn test_link_without_expiry_never_expires() {
        let link = link_expiring(None);
        assert!(!link.is_expired_at(Utc::now() + Duration::days(365 * 100)));
    }

    #[test]
    fn test_link_is_expired() {
        let link = link_expiring(Some(Utc::now() - Duration::seconds(1)));
        assert!(link.is_expired());
    }

    #[test]
    fn test_link_not_expired_at_exact_deadline() {
        let deadline = Utc::now();
        let link = link_expiring(Some(deadline));

        assert!(!link.is_expired_at(deadline));
        assert!(link.is_expired_at(deadline + Duration::milliseconds(1)));
    }

    #[test]
    fn test_new_link_into_link_starts_at_zero_clicks() {
        let now = Utc::now();
        let new_link = NewLink {
            code: "xyz7890".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            created_at: now,
            expires_at: Some(now + Duration::days(7)),
        };

        let link = new_link.into_link();

        assert_eq!(link.code, "xyz7890");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
        assert_eq!(link.expires_at, Some(now + Duration::days(7)));
    }
}

//! Link creation, resolution and removal service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::utils::code_generator::{CodeGenerator, is_valid_code};
use crate::utils::url_validator::{UrlValidationError, validate_url};

/// Number of candidate codes tried before giving up on a shorten request.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Page size used by [`LinkService::recent`] callers that don't choose one.
pub const DEFAULT_RECENT_LIMIT: i64 = 50;

/// Largest page [`LinkService::recent`] will return.
pub const MAX_RECENT_LIMIT: i64 = 500;

/// Outcomes of link operations other than success.
///
/// Validation, not-found and expired are expected answers for the caller.
/// `CodeSpaceExhausted` and `Storage` are server-side failures.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    #[error("expiry of {days} days is out of range")]
    InvalidExpiry { days: i64 },

    #[error("short link not found: {code}")]
    NotFound { code: String },

    #[error("short link expired: {code}")]
    Expired {
        code: String,
        expires_at: DateTime<Utc>,
    },

    #[error("no free short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    #[error(transparent)]
    Storage(StoreError),
}

impl From<StoreError> for LinkError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(code) => LinkError::NotFound { code },
            other => LinkError::Storage(other),
        }
    }
}

/// Result of a successful resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub original_url: String,
    /// Counter value written by this resolve. Increments committed by
    /// concurrent resolves afterwards are not reflected.
    pub clicks: i64,
}

/// Service owning the short-code lifecycle.
///
/// Holds no link data of its own: every call goes through the repository,
/// which is the single source of truth shared by concurrent requests.
pub struct LinkService<L: LinkRepository, G: CodeGenerator> {
    link_repository: Arc<L>,
    code_generator: G,
    max_attempts: usize,
}

impl<L: LinkRepository, G: CodeGenerator> LinkService<L, G> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, code_generator: G) -> Self {
        Self {
            link_repository,
            code_generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides how many candidate codes `shorten` tries (minimum 1).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Creates a short link for `original_url`.
    ///
    /// The URL is stored verbatim. A positive `expiry_days` sets
    /// `expires_at = created_at + expiry_days`; zero, negative or absent
    /// means the link never expires.
    ///
    /// # Code Generation
    ///
    /// Candidate codes are inserted directly and the store's uniqueness check
    /// decides. On collision a fresh candidate is tried, up to
    /// `max_attempts` in total.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidUrl`] if the URL is not absolute (nothing is stored)
    /// - [`LinkError::InvalidExpiry`] if the deadline overflows the calendar
    /// - [`LinkError::CodeSpaceExhausted`] if every candidate collided
    /// - [`LinkError::Storage`] on storage failure (not retried)
    pub async fn shorten(
        &self,
        original_url: &str,
        expiry_days: Option<i64>,
    ) -> Result<Link, LinkError> {
        validate_url(original_url)?;

        let created_at = Utc::now();
        let expires_at = expiry_from_days(created_at, expiry_days)?;

        for attempt in 1..=self.max_attempts {
            let new_link = NewLink {
                code: self.code_generator.generate(),
                original_url: original_url.to_string(),
                created_at,
                expires_at,
            };

            match self.link_repository.insert(new_link).await {
                Ok(link) => {
                    info!(code = %link.code, expires_at = ?link.expires_at, "Short link created");
                    return Ok(link);
                }
                Err(StoreError::CodeAlreadyExists(code)) => {
                    warn!(attempt, code = %code, "Short code collision, retrying");
                }
                Err(e) => {
                    error!(error = %e, "Failed to store short link");
                    return Err(e.into());
                }
            }
        }

        error!(attempts = self.max_attempts, "Short code space exhausted");
        Err(LinkError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a code to its original URL and records one click.
    ///
    /// An expired link is refused without touching its counter and without
    /// being deleted.
    ///
    /// # Errors
    ///
    /// - [`LinkError::NotFound`] if the code is unknown, malformed, or was
    ///   deleted between lookup and increment
    /// - [`LinkError::Expired`] if `expires_at` is strictly in the past
    /// - [`LinkError::Storage`] on storage failure
    pub async fn resolve(&self, code: &str) -> Result<Resolution, LinkError> {
        let link = self.find(code).await?;

        if let Some(expires_at) = link.expires_at.filter(|_| link.is_expired_at(Utc::now())) {
            debug!(code, %expires_at, "Refusing to resolve expired link");
            return Err(LinkError::Expired {
                code: link.code,
                expires_at,
            });
        }

        let clicks = self.link_repository.increment_clicks(code).await?;

        Ok(Resolution {
            original_url: link.original_url,
            clicks,
        })
    }

    /// Returns a link with its current click count. Pure read.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link matches `code`.
    pub async fn stats(&self, code: &str) -> Result<Link, LinkError> {
        self.find(code).await
    }

    /// Lists the newest links first. Pure read.
    ///
    /// `limit` is clamped into `1..=MAX_RECENT_LIMIT`.
    pub async fn recent(&self, limit: i64) -> Result<Vec<Link>, LinkError> {
        let limit = limit.clamp(1, MAX_RECENT_LIMIT);
        Ok(self.link_repository.list_recent(limit).await?)
    }

    /// Deletes a link. Succeeds whether or not the code existed.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] on storage failure only.
    pub async fn remove(&self, code: &str) -> Result<(), LinkError> {
        let existed = self.link_repository.delete(code).await?;
        debug!(code, existed, "Short link removed");
        Ok(())
    }

    /// Number of stored links, expired ones included.
    pub async fn count(&self) -> Result<i64, LinkError> {
        Ok(self.link_repository.count().await?)
    }

    async fn find(&self, code: &str) -> Result<Link, LinkError> {
        let not_found = || LinkError::NotFound {
            code: code.to_string(),
        };

        if !is_valid_code(code) {
            return Err(not_found());
        }

        self.link_repository.get(code).await?.ok_or_else(not_found)
    }
}

/// Computes the deadline for a link created at `created_at`.
fn expiry_from_days(
    created_at: DateTime<Utc>,
    expiry_days: Option<i64>,
) -> Result<Option<DateTime<Utc>>, LinkError> {
    match expiry_days {
        Some(days) if days > 0 => Duration::try_days(days)
            .and_then(|d| created_at.checked_add_signed(d))
            .map(Some)
            .ok_or(LinkError::InvalidExpiry { days }),
        _ => Ok(None),
    }
}

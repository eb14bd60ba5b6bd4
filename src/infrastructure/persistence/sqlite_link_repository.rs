//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::utils::db_error::is_unique_violation_on_code;

/// Row shape of the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    original_url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.code, r.original_url, r.clicks, r.created_at, r.expires_at)
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Each mutation is a single statement, so SQLite's statement atomicity gives
/// the per-row guarantees the trait requires without explicit transactions.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (code, original_url, clicks, created_at, expires_at)
            VALUES (?, ?, 0, ?, ?)
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .execute(self.pool.as_ref())
        .await;

        match result {
            Ok(_) => Ok(new_link.into_link()),
            Err(e) if is_unique_violation_on_code(&e) => {
                Err(StoreError::CodeAlreadyExists(new_link.code))
            }
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    async fn get(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, original_url, clicks, created_at, expires_at
            FROM links
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<i64, StoreError> {
        let clicks = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE code = ?
            RETURNING clicks
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        clicks.ok_or_else(|| StoreError::NotFound(code.to_string()))
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM links WHERE code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, StoreError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, original_url, clicks, created_at, expires_at
            FROM links
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

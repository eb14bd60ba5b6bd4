#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use shortcode::application::services::LinkService;
use shortcode::infrastructure::persistence::SqliteLinkRepository;
use shortcode::state::{AppLinkService, AppState};
use shortcode::utils::code_generator::RandomCodeGenerator;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://localhost:3001";

pub async fn insert_link(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
) {
    sqlx::query(
        "INSERT INTO links (code, original_url, clicks, created_at, expires_at) VALUES (?, ?, 0, ?, ?)",
    )
    .bind(code)
    .bind(url)
    .bind(created_at)
    .bind(expires_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    insert_link(pool, code, url, Utc::now(), None).await;
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, url: &str) {
    let now = Utc::now();
    insert_link(
        pool,
        code,
        url,
        now - Duration::days(2),
        Some(now - Duration::hours(1)),
    )
    .await;
}

pub async fn set_clicks(pool: &SqlitePool, code: &str, clicks: i64) {
    sqlx::query("UPDATE links SET clicks = ? WHERE code = ?")
        .bind(clicks)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_exists(pool: &SqlitePool, code: &str) -> bool {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
        > 0
}

pub fn create_link_service(pool: SqlitePool) -> AppLinkService {
    let link_repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    LinkService::new(link_repo, RandomCodeGenerator::default())
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_link_service(pool)), TEST_BASE_URL)
}

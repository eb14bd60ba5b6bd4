//! API route configuration.

use crate::api::handlers::{delete_link_handler, list_links_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// REST API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`      - Create a short link
/// - `GET    /stats/{code}` - Current state of one link
/// - `GET    /urls`         - Most recent links, newest first
/// - `DELETE /urls/{code}`  - Delete a link (idempotent)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/urls", get(list_links_handler))
        .route("/urls/{code}", delete(delete_link_handler))
}

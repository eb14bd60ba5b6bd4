//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{code}` - Short link redirect
//! - `GET  /health`   - Health check
//! - `/api/*`         - REST API for link management
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Path prefix under which short codes are resolved.
pub const RESOLVE_PREFIX: &str = "/r";

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route(&format!("{RESOLVE_PREFIX}/{{code}}"), get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

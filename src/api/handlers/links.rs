//! Handlers for link listing and deletion.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::link::LinkResponse;
use crate::api::dto::list::{DeleteResponse, ListQuery};
use crate::application::services::DEFAULT_RECENT_LIMIT;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recently created links.
///
/// # Endpoint
///
/// `GET /api/urls?limit=50`
///
/// # Query Parameters
///
/// - `limit` (optional): Number of links (default: 50, range 1-500)
///
/// # Response
///
/// Array of links, newest first. Listing never changes click counts.
pub async fn list_links_handler(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let links = state
        .link_service
        .recent(query.limit.unwrap_or(DEFAULT_RECENT_LIMIT))
        .await?;

    Ok(Json(
        links
            .into_iter()
            .map(|link| LinkResponse::from_link(link, &state.base_url))
            .collect(),
    ))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// # Behavior
///
/// The row is removed; the code answers 404 afterwards. Deleting a code that
/// does not exist is not an error, the response is the same.
///
/// # Response
///
/// ```json
/// { "success": true }
/// ```
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.remove(&code).await?;

    Ok(Json(DeleteResponse { success: true }))
}

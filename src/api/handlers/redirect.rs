//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::application::services::LinkError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Responses
///
/// - **307 Temporary Redirect** to the original URL
/// - **404 Not Found** if the code doesn't exist
/// - **410 Gone** if the link has expired (its click count is left unchanged)
///
/// Not-found and gone are rendered as small HTML pages since this endpoint is
/// hit by browsers. Storage failures use the JSON error body.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve(&code).await {
        Ok(resolution) => {
            debug!(code, clicks = resolution.clicks, "Redirecting");
            redirect_to(&resolution.original_url)
        }
        Err(LinkError::NotFound { .. }) => {
            Ok((StatusCode::NOT_FOUND, Html("<h1>Short URL not found</h1>")).into_response())
        }
        Err(LinkError::Expired { .. }) => {
            Ok((StatusCode::GONE, Html("<h1>This link has expired</h1>")).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Builds the 307 response. URLs are stored verbatim; ASCII ones are sent
/// as is, anything else (e.g. an IDN host) is re-serialized in ASCII form.
fn redirect_to(original_url: &str) -> Result<Response, AppError> {
    let unusable = || {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({}),
        )
    };

    let location = if original_url.is_ascii() {
        HeaderValue::from_str(original_url)
    } else {
        let url = Url::parse(original_url).map_err(|_| unusable())?;
        HeaderValue::from_str(url.as_str())
    }
    .map_err(|_| unusable())?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

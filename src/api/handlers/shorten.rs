//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short id for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// `201 Created` with the allocated short id:
///
/// ```json
/// { "short_id": "Ab3xYz09", "url": "https://example.com/a" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is not a valid absolute URL.
/// Returns 500 Internal Server Error if no unique short id could be
/// allocated within the attempt budget.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let mapping = state.shortener.shorten(payload.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_id: mapping.short_id,
            url: mapping.url,
        }),
    ))
}

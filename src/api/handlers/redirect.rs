//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// The path segment is taken as-is: no length or alphabet validation is
/// applied, an identifier that was never issued simply misses the lookup.
///
/// # Response
///
/// `307 Temporary Redirect` with the original URL in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if no mapping exists for the short id.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.shortener.resolve(&short_id).await?;

    Ok(Redirect::temporary(&mapping.url))
}

//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response for a successfully created mapping.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
    pub url: String,
}

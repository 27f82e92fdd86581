//! Application error type and HTTP response mapping.
//!
//! Errors carry a machine-readable code, a human-readable message, and a
//! structured `details` payload that is serialized into the JSON error body.
//!
//! The taxonomy mirrors the service contract:
//!
//! - [`AppError::NotFound`] - a lookup missed; a modeled outcome, not a fault
//! - [`AppError::DuplicateShortId`] - the storage layer rejected an insert on
//!   the `short_id` unique index; handled locally by the write-path retry loop
//! - [`AppError::GenerationExhausted`] - the retry budget ran out
//! - everything else propagates as validation or internal errors

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error descriptor embedded in JSON error responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The storage layer rejected an insert because the candidate short id
    /// already exists. The write path retries on this variant; it only
    /// reaches a client if the retry loop is bypassed.
    #[error("short id {short_id:?} already exists")]
    DuplicateShortId { short_id: String },

    /// The write path could not allocate a unique short id within its
    /// attempt budget. Surfaced as a transient server error.
    #[error("failed to allocate a unique short id after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Converts the error into its serializable descriptor.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::Validation { details, .. } => ("validation_error", details.clone()),
            AppError::NotFound { details, .. } => ("not_found", details.clone()),
            AppError::DuplicateShortId { short_id } => {
                ("duplicate_short_id", json!({ "short_id": short_id }))
            }
            AppError::GenerationExhausted { attempts } => {
                ("generation_exhausted", json!({ "attempts": attempts }))
            }
            AppError::Internal { details, .. } => ("internal_error", details.clone()),
        };

        ErrorInfo {
            code,
            message: self.to_string(),
            details,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::DuplicateShortId { .. } => StatusCode::CONFLICT,
            AppError::GenerationExhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}

/// Translates a sqlx error into an [`AppError`].
///
/// A unique violation on the `urls_short_id_key` index becomes the tagged
/// [`AppError::DuplicateShortId`] variant, which is atomic with respect to
/// concurrent writers and drives the write-path retry loop. Every other
/// database failure propagates as [`AppError::Internal`] unclassified.
pub fn map_sqlx_error(e: sqlx::Error, short_id: &str) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
        && matches!(db.constraint(), Some("urls_short_id_key"))
    {
        return AppError::DuplicateShortId {
            short_id: short_id.to_string(),
        };
    }

    tracing::error!("database error: {e}");
    AppError::internal("Database error", json!({}))
}

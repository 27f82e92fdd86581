//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// Exposes exactly the persistence contract of the core: create a mapping if
/// its short id is free, and look a mapping up by short id. Each call runs as
/// its own short-lived unit of work against the backend; implementations must
/// not share a mutable session across concurrent callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping, relying on the storage layer's unique index to
    /// reject a taken short id.
    ///
    /// The insert is attempted directly rather than preceded by an existence
    /// check: the constraint rejection is atomic with respect to concurrent
    /// writers, whereas check-then-insert leaves a race window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateShortId`] if `new_mapping.short_id`
    /// already exists. Returns [`AppError::Internal`] on other database
    /// errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its short id.
    ///
    /// Absence is a modeled outcome: unknown or malformed identifiers
    /// resolve to `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Verifies the storage backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}

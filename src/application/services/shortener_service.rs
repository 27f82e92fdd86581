//! URL shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::short_id::{DEFAULT_SHORT_ID_LENGTH, generate_short_id};

/// Default cap on insert attempts before giving up on a shorten call.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Service for creating and resolving short URL mappings.
///
/// The repository is injected explicitly; the service holds no other state
/// and no lock across I/O, so a single instance serves concurrent requests.
pub struct ShortenerService {
    repository: Arc<dyn MappingRepository>,
    short_id_length: usize,
    max_attempts: usize,
}

impl ShortenerService {
    /// Creates a service with the default id length (8) and attempt cap (5).
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self::with_limits(repository, DEFAULT_SHORT_ID_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a service with explicit id length and attempt cap.
    pub fn with_limits(
        repository: Arc<dyn MappingRepository>,
        short_id_length: usize,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            short_id_length,
            max_attempts,
        }
    }

    /// Creates a mapping for `url` under a freshly generated short id.
    ///
    /// # Collision handling
    ///
    /// Candidates are inserted optimistically: the storage layer's unique
    /// index is what rejects a taken id, atomically with respect to
    /// concurrent writers. On a [`AppError::DuplicateShortId`] rejection the
    /// loop retries with a new candidate, up to the configured attempt cap.
    /// Any other storage error aborts the loop and propagates unchanged.
    ///
    /// On success exactly one row has been durably persisted; on exhaustion,
    /// none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::GenerationExhausted`] if every attempt collided.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, url: String) -> Result<UrlMapping, AppError> {
        for attempt in 1..=self.max_attempts {
            let candidate = generate_short_id(self.short_id_length);

            match self
                .repository
                .insert(NewMapping {
                    url: url.clone(),
                    short_id: candidate,
                })
                .await
            {
                Ok(mapping) => return Ok(mapping),
                Err(AppError::DuplicateShortId { short_id }) => {
                    tracing::debug!(
                        %short_id,
                        attempt,
                        max_attempts = self.max_attempts,
                        "short id collision, retrying"
                    );
                }
                Err(other) => return Err(other),
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            "exhausted short id generation attempts"
        );

        Err(AppError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a short id back to its mapping.
    ///
    /// Takes any string; identifiers that were never issued simply miss.
    /// Read-only and idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for `short_id`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, short_id: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Short link not found",
                    serde_json::json!({ "short_id": short_id }),
                )
            })
    }

    /// Verifies the backing store is reachable, for health reporting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMappingRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_shorten_succeeds_on_first_attempt() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo
            .expect_insert()
            .withf(|m| m.url == "https://example.com/a" && m.short_id.len() == 8)
            .times(1)
            .returning(|m| Ok(UrlMapping::new(1, m.url, m.short_id)));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let mapping = service
            .shorten("https://example.com/a".to_string())
            .await
            .unwrap();

        assert_eq!(mapping.url, "https://example.com/a");
        assert_eq!(mapping.short_id.len(), 8);
        assert!(mapping.short_id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut mock_repo = MockMappingRepository::new();
        let mut calls = 0;

        mock_repo.expect_insert().times(3).returning(move |m| {
            calls += 1;
            if calls < 3 {
                Err(AppError::DuplicateShortId {
                    short_id: m.short_id,
                })
            } else {
                Ok(UrlMapping::new(7, m.url, m.short_id))
            }
        });

        let service = ShortenerService::new(Arc::new(mock_repo));

        let mapping = service
            .shorten("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(mapping.id, 7);
    }

    #[tokio::test]
    async fn test_shorten_exhausts_after_exactly_five_attempts() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo.expect_insert().times(5).returning(|m| {
            Err(AppError::DuplicateShortId {
                short_id: m.short_id,
            })
        });

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.shorten("https://example.com".to_string()).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::GenerationExhausted { attempts: 5 }
        ));
    }

    #[tokio::test]
    async fn test_shorten_does_not_retry_other_errors() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.shorten("https://example.com".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_shorten_respects_configured_limits() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo
            .expect_insert()
            .withf(|m| m.short_id.len() == 12)
            .times(2)
            .returning(|m| {
                Err(AppError::DuplicateShortId {
                    short_id: m.short_id,
                })
            });

        let service = ShortenerService::with_limits(Arc::new(mock_repo), 12, 2);

        let result = service.shorten("https://example.com".to_string()).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::GenerationExhausted { attempts: 2 }
        ));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo
            .expect_find_by_short_id()
            .withf(|s| s == "Ab3xYz09")
            .times(1)
            .returning(|s| {
                Ok(Some(UrlMapping::new(
                    1,
                    "https://example.com/a".to_string(),
                    s.to_string(),
                )))
            });

        let service = ShortenerService::new(Arc::new(mock_repo));

        let mapping = service.resolve("Ab3xYz09").await.unwrap();
        assert_eq!(mapping.url, "https://example.com/a");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo
            .expect_find_by_short_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.resolve("doesnotexist").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let mut mock_repo = MockMappingRepository::new();

        mock_repo
            .expect_find_by_short_id()
            .times(2)
            .returning(|s| {
                Ok(Some(UrlMapping::new(
                    3,
                    "https://example.com/stable".to_string(),
                    s.to_string(),
                )))
            });

        let service = ShortenerService::new(Arc::new(mock_repo));

        let first = service.resolve("Ab3xYz09").await.unwrap();
        let second = service.resolve("Ab3xYz09").await.unwrap();
        assert_eq!(first, second);
    }
}

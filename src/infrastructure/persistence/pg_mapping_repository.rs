//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for URL mapping storage and retrieval.
///
/// Every operation acquires a connection from the pool for the duration of a
/// single statement and releases it before returning, so no session is ever
/// shared mutably across concurrent requests.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO urls (url, short_id)
            VALUES ($1, $2)
            RETURNING id, url, short_id
            "#,
        )
        .bind(&new_mapping.url)
        .bind(&new_mapping.short_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, &new_mapping.short_id))?;

        Ok(UrlMapping::new(
            row.get("id"),
            row.get("url"),
            row.get("short_id"),
        ))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, url, short_id
            FROM urls
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, short_id))?;

        Ok(row.map(|r| UrlMapping::new(r.get("id"), r.get("url"), r.get("short_id"))))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                tracing::error!("database ping failed: {e}");
                AppError::internal("Database unreachable", serde_json::json!({}))
            })?;

        Ok(())
    }
}

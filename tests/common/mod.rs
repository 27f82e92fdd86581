#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use shortlink::prelude::*;

/// In-memory mapping repository backing handler tests.
///
/// Mirrors the storage contract of the PostgreSQL implementation: inserts
/// are rejected with the tagged duplicate variant when the short id is
/// taken, lookups miss with `Ok(None)`.
pub struct InMemoryMappingRepository {
    rows: Mutex<HashMap<String, UrlMapping>>,
    next_id: AtomicI64,
    insert_attempts: AtomicUsize,
    /// When set, every insert is rejected as a duplicate, simulating a
    /// generator that only produces already-taken ids.
    reject_all_inserts: AtomicBool,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            insert_attempts: AtomicUsize::new(0),
            reject_all_inserts: AtomicBool::new(false),
        }
    }

    pub fn reject_all_inserts(&self) {
        self.reject_all_inserts.store(true, Ordering::SeqCst);
    }

    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn seed(&self, url: &str, short_id: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(
            short_id.to_string(),
            UrlMapping::new(id, url.to_string(), short_id.to_string()),
        );
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);

        if self.reject_all_inserts.load(Ordering::SeqCst) {
            return Err(AppError::DuplicateShortId {
                short_id: new_mapping.short_id,
            });
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&new_mapping.short_id) {
            return Err(AppError::DuplicateShortId {
                short_id: new_mapping.short_id,
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mapping = UrlMapping::new(id, new_mapping.url, new_mapping.short_id.clone());
        rows.insert(new_mapping.short_id, mapping.clone());

        Ok(mapping)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.rows.lock().unwrap().get(short_id).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Builds application state around an in-memory repository.
pub fn create_test_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let shortener = Arc::new(ShortenerService::new(repository.clone()));

    (AppState::new(shortener), repository)
}

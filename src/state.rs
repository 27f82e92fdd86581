//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// State shared across all request handlers.
///
/// Holds the explicitly constructed service graph; no process-global storage
/// handles exist anywhere in the crate.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    /// Creates application state around a shortener service.
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self { shortener }
    }
}

//! Application services orchestrating domain operations.

pub mod shortener_service;

pub use shortener_service::ShortenerService;

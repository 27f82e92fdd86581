//! Utility functions shared across the application.
//!
//! - [`short_id`] - random short identifier generation

pub mod short_id;

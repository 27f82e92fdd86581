//! Infrastructure layer: database access and external integrations.

pub mod persistence;

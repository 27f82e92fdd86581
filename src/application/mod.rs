//! Application layer: business logic and service orchestration.

pub mod services;

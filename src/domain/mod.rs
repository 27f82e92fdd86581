//! Domain layer: core entities and repository traits.
//!
//! This layer has no knowledge of HTTP or the database driver. Concrete
//! storage lives in [`crate::infrastructure`]; orchestration lives in
//! [`crate::application`].

pub mod entities;
pub mod repositories;

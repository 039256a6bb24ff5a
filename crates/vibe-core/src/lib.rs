//! # Vibe Core
//! 
//! Domain entities, tree read-model, services, and repository traits for the
//! dance-school platform.

pub mod domain;
pub mod tree;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;

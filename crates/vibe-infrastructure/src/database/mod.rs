//! Database module (PostgreSQL and in-memory adapters)

pub mod connection;
pub mod memory;
pub mod postgres;
mod error;

pub use connection::{create_pool, run_migrations};

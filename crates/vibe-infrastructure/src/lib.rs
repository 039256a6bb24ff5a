//! # Vibe Infrastructure
//! 
//! Storage adapters: PostgreSQL repositories plus in-memory equivalents.

pub mod database;

pub use database::{create_pool, run_migrations};
pub use database::memory::{InMemoryCatalogRepository, InMemorySiteConfigRepository, InMemoryTreeRepository};
pub use database::postgres::{
    PgCatalogRepository, PgDanceStyleRepository, PgMenuItemRepository, PgOrganizationNodeRepository,
    PgSiteConfigRepository,
};

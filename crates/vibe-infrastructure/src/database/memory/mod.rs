//! In-memory repository implementations.
//!
//! They enforce the same constraints as the PostgreSQL schema (unique slugs,
//! existing parents, parent-delete rules) and back the test suites and the
//! server's `--in-memory` mode.

pub mod tree_repo;
pub mod site_config_repo;
pub mod catalog_repo;

pub use tree_repo::InMemoryTreeRepository;
pub use site_config_repo::InMemorySiteConfigRepository;
pub use catalog_repo::InMemoryCatalogRepository;

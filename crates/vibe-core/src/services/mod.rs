//! Domain services (business logic)

pub mod tree_service;
pub mod site_config_service;
pub mod catalog_service;
pub mod seed_service;
mod seed_data;

pub use tree_service::TreeService;
pub use site_config_service::SiteConfigService;
pub use catalog_service::{CatalogService, CatalogFilter};
pub use seed_service::{SeedService, SeedReport};

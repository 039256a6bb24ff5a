//! Repository traits (ports)

pub mod tree_repository;
pub mod site_config_repository;
pub mod catalog_repository;

pub use tree_repository::TreeRepository;
pub use site_config_repository::SiteConfigRepository;
pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use site_config_repository::MockSiteConfigRepository;
#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;

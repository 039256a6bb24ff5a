//! PostgreSQL repository implementations

pub mod organization_node_repo_impl;
pub mod menu_item_repo_impl;
pub mod dance_style_repo_impl;
pub mod site_config_repo_impl;
pub mod catalog_repo_impl;

pub use organization_node_repo_impl::PgOrganizationNodeRepository;
pub use menu_item_repo_impl::PgMenuItemRepository;
pub use dance_style_repo_impl::PgDanceStyleRepository;
pub use site_config_repo_impl::PgSiteConfigRepository;
pub use catalog_repo_impl::PgCatalogRepository;

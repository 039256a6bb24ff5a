//! Service wiring for the two storage backends.

use std::sync::Arc;

use sqlx::PgPool;
use vibe_api::AppState;
use vibe_core::domain::{DanceStyle, MenuItem, OrganizationNode};
use vibe_core::services::{CatalogService, SeedService, SiteConfigService, TreeService};
use vibe_infrastructure::{
    InMemoryCatalogRepository, InMemorySiteConfigRepository, InMemoryTreeRepository, PgCatalogRepository,
    PgDanceStyleRepository, PgMenuItemRepository, PgOrganizationNodeRepository, PgSiteConfigRepository,
};

pub struct Services {
    pub organization: Arc<TreeService<OrganizationNode>>,
    pub menu: Arc<TreeService<MenuItem>>,
    pub styles: Arc<TreeService<DanceStyle>>,
    pub catalog: Arc<CatalogService>,
    pub site_config: Arc<SiteConfigService>,
}

impl Services {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            organization: Arc::new(TreeService::new(Arc::new(PgOrganizationNodeRepository::new(pool.clone())))),
            menu: Arc::new(TreeService::new(Arc::new(PgMenuItemRepository::new(pool.clone())))),
            styles: Arc::new(TreeService::new(Arc::new(PgDanceStyleRepository::new(pool.clone())))),
            catalog: Arc::new(CatalogService::new(Arc::new(PgCatalogRepository::new(pool.clone())))),
            site_config: Arc::new(SiteConfigService::new(Arc::new(PgSiteConfigRepository::new(pool)))),
        }
    }

    /// Process-local storage; everything is lost on exit.
    pub fn in_memory() -> Self {
        Self {
            organization: Arc::new(TreeService::new(Arc::new(InMemoryTreeRepository::new()))),
            menu: Arc::new(TreeService::new(Arc::new(InMemoryTreeRepository::new()))),
            styles: Arc::new(TreeService::new(Arc::new(InMemoryTreeRepository::new()))),
            catalog: Arc::new(CatalogService::new(Arc::new(InMemoryCatalogRepository::new()))),
            site_config: Arc::new(SiteConfigService::new(Arc::new(InMemorySiteConfigRepository::new()))),
        }
    }

    pub fn seeder(&self) -> SeedService {
        SeedService::new(
            self.organization.clone(),
            self.menu.clone(),
            self.styles.clone(),
            self.catalog.clone(),
            self.site_config.clone(),
        )
    }

    pub fn into_state(self, app_name: String) -> AppState {
        AppState {
            organization: self.organization,
            menu: self.menu,
            styles: self.styles,
            catalog: self.catalog,
            site_config: self.site_config,
            app_name,
        }
    }
}

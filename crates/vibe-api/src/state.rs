use std::sync::Arc;

use axum::extract::FromRef;
use vibe_core::domain::{DanceStyle, MenuItem, OrganizationNode};
use vibe_core::services::{CatalogService, SiteConfigService, TreeService};

/// Shared handler state. Services are behind `Arc` so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub organization: Arc<TreeService<OrganizationNode>>,
    pub menu: Arc<TreeService<MenuItem>>,
    pub styles: Arc<TreeService<DanceStyle>>,
    pub catalog: Arc<CatalogService>,
    pub site_config: Arc<SiteConfigService>,
    pub app_name: String,
}

impl FromRef<AppState> for Arc<TreeService<OrganizationNode>> {
    fn from_ref(state: &AppState) -> Self {
        state.organization.clone()
    }
}

impl FromRef<AppState> for Arc<TreeService<MenuItem>> {
    fn from_ref(state: &AppState) -> Self {
        state.menu.clone()
    }
}

impl FromRef<AppState> for Arc<TreeService<DanceStyle>> {
    fn from_ref(state: &AppState) -> Self {
        state.styles.clone()
    }
}

impl FromRef<AppState> for Arc<CatalogService> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for Arc<SiteConfigService> {
    fn from_ref(state: &AppState) -> Self {
        state.site_config.clone()
    }
}

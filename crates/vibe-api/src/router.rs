// ============================================================================
// Vibe API - Router
// File: crates/vibe-api/src/router.rs
// ============================================================================

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use vibe_core::domain::{DanceStyle, MenuItem, OrganizationNode};
use vibe_shared::constants::API_PREFIX;

use crate::handlers::{catalog, health, organization, site_config, tree};
use crate::state::AppState;

/// Every read route, with request tracing. CORS is left to the binary.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Organization
        .route("/organization/nodes", get(tree::list_roots::<OrganizationNode>))
        .route("/organization/nodes/{slug}", get(tree::get_by_slug::<OrganizationNode>))
        .route("/organization/structure", get(organization::structure))
        .route("/organization/roles", get(catalog::list_roles))
        .route("/organization/roles/{slug}", get(catalog::get_role))
        // Menu
        .route("/menu/items", get(tree::list_roots::<MenuItem>))
        .route("/menu/items/{slug}", get(tree::get_by_slug::<MenuItem>))
        // Common
        .route("/common/styles", get(tree::list_roots::<DanceStyle>))
        .route("/common/styles/{slug}", get(tree::get_by_slug::<DanceStyle>))
        .route("/common/levels", get(catalog::list_levels))
        .route("/common/levels/{slug}", get(catalog::get_level))
        .route("/common/professions", get(catalog::list_professions))
        .route("/common/professions/{slug}", get(catalog::get_profession))
        .route("/common/config", get(site_config::get_site_config))
        // Courses & events
        .route("/courses", get(catalog::list_courses))
        .route("/courses/{slug}", get(catalog::get_course))
        .route("/events", get(catalog::list_events))
        .route("/events/{slug}", get(catalog::get_event))
        // Shop
        .route("/shop/products", get(catalog::list_products))
        .route("/shop/products/{slug}", get(catalog::get_product));

    Router::new()
        .route("/health", get(health::health_check))
        .nest(API_PREFIX, api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

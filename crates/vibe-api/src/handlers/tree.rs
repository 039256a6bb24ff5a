// ============================================================================
// Vibe API - Tree Handlers
// File: crates/vibe-api/src/handlers/tree.rs
// ============================================================================
//! Root listing and slug lookup, shared by every tree entity. The router
//! instantiates these once per entity type.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use vibe_core::services::TreeService;
use vibe_core::tree::{NestedNode, TreeEntity, TreeQuery};

use crate::error::ApiError;
use crate::response::ApiResponse;

/// GET /{collection}?depth=N
pub async fn list_roots<T: TreeEntity>(
    State(service): State<Arc<TreeService<T>>>,
    Query(query): Query<TreeQuery>,
) -> Result<Json<ApiResponse<Vec<NestedNode<T>>>>, ApiError> {
    let roots = service.list_roots(&query).await?;
    debug!("Returning {} {} roots", roots.len(), T::KIND);
    Ok(Json(ApiResponse::success(roots)))
}

/// GET /{collection}/{slug}?depth=N
pub async fn get_by_slug<T: TreeEntity>(
    State(service): State<Arc<TreeService<T>>>,
    Path(slug): Path<String>,
    Query(query): Query<TreeQuery>,
) -> Result<Json<ApiResponse<NestedNode<T>>>, ApiError> {
    let node = service.get_by_slug(&slug, &query).await?;
    Ok(Json(ApiResponse::success(node)))
}

//! Organization-specific endpoints

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use vibe_core::domain::{NodeType, OrganizationNode};
use vibe_core::services::TreeService;

use crate::error::ApiError;
use crate::response::ApiResponse;

/// One node of the flat structure consumed by the 3D scene.
#[derive(Debug, Serialize)]
pub struct StructureNode {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub parent_id: Option<Uuid>,
}

impl From<OrganizationNode> for StructureNode {
    fn from(node: OrganizationNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            slug: node.slug,
            node_type: node.node_type,
            parent_id: node.parent_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StructureResponse {
    pub nodes: Vec<StructureNode>,
}

/// Structure handler - GET /api/v1/organization/structure
pub async fn structure(
    State(service): State<Arc<TreeService<OrganizationNode>>>,
) -> Result<Json<ApiResponse<StructureResponse>>, ApiError> {
    let nodes = service.all().await?.into_iter().map(StructureNode::from).collect();
    Ok(Json(ApiResponse::success(StructureResponse { nodes })))
}

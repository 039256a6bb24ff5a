// ============================================================================
// Vibe Infrastructure - PostgreSQL Organization Node Repository
// File: crates/vibe-infrastructure/src/database/postgres/organization_node_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use vibe_core::domain::{NodeType, OrbitShape, OrganizationNode, PlanetType, VisualSource};
use vibe_core::error::DomainError;
use vibe_core::repositories::TreeRepository;
use vibe_shared::types::Timestamps;

use crate::database::error::db_error;

const NODE_COLUMNS: &str = r#"
    id, name, slug, parent_id, node_type, video_url, description,
    visual_source, planet_type, model_3d, planet_texture, planet_color,
    orbit_radius, orbit_speed, planet_scale, rotation_speed, orbit_phase,
    orbit_shape, orbit_roundness, is_visible_3d, created_at, updated_at
"#;

pub struct PgOrganizationNodeRepository {
    pool: PgPool,
}

impl PgOrganizationNodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, filter: &str, parent_id: Option<&Uuid>) -> Result<Vec<OrganizationNode>, DomainError> {
        let sql = format!("SELECT {} FROM organization_nodes {}", NODE_COLUMNS, filter);
        let mut query = sqlx::query_as::<_, OrganizationNodeRow>(&sql);
        if let Some(parent_id) = parent_id {
            query = query.bind(parent_id);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing organization nodes", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct OrganizationNodeRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<Uuid>,
    pub node_type: String,
    pub video_url: String,
    pub description: String,
    pub visual_source: String,
    pub planet_type: String,
    pub model_3d: Option<String>,
    pub planet_texture: Option<String>,
    pub planet_color: String,
    pub orbit_radius: f64,
    pub orbit_speed: f64,
    pub planet_scale: f64,
    pub rotation_speed: f64,
    pub orbit_phase: f64,
    pub orbit_shape: String,
    pub orbit_roundness: f64,
    pub is_visible_3d: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrganizationNodeRow> for OrganizationNode {
    fn from(row: OrganizationNodeRow) -> Self {
        OrganizationNode {
            id: row.id,
            name: row.name,
            slug: row.slug,
            parent_id: row.parent_id,
            node_type: NodeType::from_str(&row.node_type).unwrap_or_default(),
            video_url: row.video_url,
            description: row.description,
            visual_source: VisualSource::from_str(&row.visual_source).unwrap_or_default(),
            planet_type: PlanetType::from_str(&row.planet_type).unwrap_or_default(),
            model_3d: row.model_3d,
            planet_texture: row.planet_texture,
            planet_color: row.planet_color,
            orbit_radius: row.orbit_radius,
            orbit_speed: row.orbit_speed,
            planet_scale: row.planet_scale,
            rotation_speed: row.rotation_speed,
            orbit_phase: row.orbit_phase,
            orbit_shape: OrbitShape::from_str(&row.orbit_shape).unwrap_or_default(),
            orbit_roundness: row.orbit_roundness,
            is_visible_3d: row.is_visible_3d,
            timestamps: Timestamps {
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

#[async_trait]
impl TreeRepository<OrganizationNode> for PgOrganizationNodeRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<OrganizationNode>, DomainError> {
        let sql = format!("SELECT {} FROM organization_nodes WHERE id = $1", NODE_COLUMNS);
        let row: Option<OrganizationNodeRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding organization node by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<OrganizationNode>, DomainError> {
        let sql = format!("SELECT {} FROM organization_nodes WHERE slug = $1", NODE_COLUMNS);
        let row: Option<OrganizationNodeRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding organization node by slug", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_roots(&self) -> Result<Vec<OrganizationNode>, DomainError> {
        self.fetch_many("WHERE parent_id IS NULL", None).await
    }

    async fn find_children(&self, parent_id: &Uuid) -> Result<Vec<OrganizationNode>, DomainError> {
        self.fetch_many("WHERE parent_id = $1", Some(parent_id)).await
    }

    async fn find_all(&self) -> Result<Vec<OrganizationNode>, DomainError> {
        self.fetch_many("", None).await
    }

    async fn create(&self, node: &OrganizationNode) -> Result<OrganizationNode, DomainError> {
        info!("Creating organization node: {}", node.slug);

        let sql = format!(
            r#"
            INSERT INTO organization_nodes ({})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)
            RETURNING {}
            "#,
            NODE_COLUMNS, NODE_COLUMNS
        );
        let row: OrganizationNodeRow = sqlx::query_as(&sql)
            .bind(node.id)
            .bind(&node.name)
            .bind(&node.slug)
            .bind(node.parent_id)
            .bind(node.node_type.as_str())
            .bind(&node.video_url)
            .bind(&node.description)
            .bind(node.visual_source.as_str())
            .bind(node.planet_type.as_str())
            .bind(&node.model_3d)
            .bind(&node.planet_texture)
            .bind(&node.planet_color)
            .bind(node.orbit_radius)
            .bind(node.orbit_speed)
            .bind(node.planet_scale)
            .bind(node.rotation_speed)
            .bind(node.orbit_phase)
            .bind(node.orbit_shape.as_str())
            .bind(node.orbit_roundness)
            .bind(node.is_visible_3d)
            .bind(node.timestamps.created_at)
            .bind(node.timestamps.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("creating organization node", e))?;

        Ok(row.into())
    }

    async fn update(&self, node: &OrganizationNode) -> Result<OrganizationNode, DomainError> {
        let sql = format!(
            r#"
            UPDATE organization_nodes
            SET name = $2, slug = $3, parent_id = $4, node_type = $5, video_url = $6,
                description = $7, visual_source = $8, planet_type = $9, model_3d = $10,
                planet_texture = $11, planet_color = $12, orbit_radius = $13,
                orbit_speed = $14, planet_scale = $15, rotation_speed = $16,
                orbit_phase = $17, orbit_shape = $18, orbit_roundness = $19,
                is_visible_3d = $20, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            NODE_COLUMNS
        );
        let row: Option<OrganizationNodeRow> = sqlx::query_as(&sql)
            .bind(node.id)
            .bind(&node.name)
            .bind(&node.slug)
            .bind(node.parent_id)
            .bind(node.node_type.as_str())
            .bind(&node.video_url)
            .bind(&node.description)
            .bind(node.visual_source.as_str())
            .bind(node.planet_type.as_str())
            .bind(&node.model_3d)
            .bind(&node.planet_texture)
            .bind(&node.planet_color)
            .bind(node.orbit_radius)
            .bind(node.orbit_speed)
            .bind(node.planet_scale)
            .bind(node.rotation_speed)
            .bind(node.orbit_phase)
            .bind(node.orbit_shape.as_str())
            .bind(node.orbit_roundness)
            .bind(node.is_visible_3d)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("updating organization node", e))?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found("OrganizationNode", node.id))
    }

    /// Children are promoted to roots by the `ON DELETE SET NULL` foreign key.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM organization_nodes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting organization node", e))?;

        Ok(result.rows_affected() > 0)
    }
}

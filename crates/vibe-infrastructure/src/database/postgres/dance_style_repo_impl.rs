//! PostgreSQL dance style repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use vibe_core::domain::DanceStyle;
use vibe_core::error::DomainError;
use vibe_core::repositories::TreeRepository;
use vibe_shared::types::Timestamps;

use crate::database::error::db_error;

const STYLE_COLUMNS: &str = "id, name, slug, parent_id, icon, description, created_at, updated_at";

pub struct PgDanceStyleRepository {
    pool: PgPool,
}

impl PgDanceStyleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, filter: &str, parent_id: Option<&Uuid>) -> Result<Vec<DanceStyle>, DomainError> {
        let sql = format!("SELECT {} FROM dance_styles {}", STYLE_COLUMNS, filter);
        let mut query = sqlx::query_as::<_, DanceStyleRow>(&sql);
        if let Some(parent_id) = parent_id {
            query = query.bind(parent_id);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing dance styles", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, FromRow)]
struct DanceStyleRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<Uuid>,
    pub icon: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DanceStyleRow> for DanceStyle {
    fn from(row: DanceStyleRow) -> Self {
        DanceStyle {
            id: row.id,
            name: row.name,
            slug: row.slug,
            parent_id: row.parent_id,
            icon: row.icon,
            description: row.description,
            timestamps: Timestamps {
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

#[async_trait]
impl TreeRepository<DanceStyle> for PgDanceStyleRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<DanceStyle>, DomainError> {
        let sql = format!("SELECT {} FROM dance_styles WHERE id = $1", STYLE_COLUMNS);
        let row: Option<DanceStyleRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding dance style by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<DanceStyle>, DomainError> {
        let sql = format!("SELECT {} FROM dance_styles WHERE slug = $1", STYLE_COLUMNS);
        let row: Option<DanceStyleRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding dance style by slug", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_roots(&self) -> Result<Vec<DanceStyle>, DomainError> {
        self.fetch_many("WHERE parent_id IS NULL", None).await
    }

    async fn find_children(&self, parent_id: &Uuid) -> Result<Vec<DanceStyle>, DomainError> {
        self.fetch_many("WHERE parent_id = $1", Some(parent_id)).await
    }

    async fn find_all(&self) -> Result<Vec<DanceStyle>, DomainError> {
        self.fetch_many("", None).await
    }

    async fn create(&self, style: &DanceStyle) -> Result<DanceStyle, DomainError> {
        info!("Creating dance style: {}", style.slug);

        let sql = format!(
            "INSERT INTO dance_styles ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            STYLE_COLUMNS, STYLE_COLUMNS
        );
        let row: DanceStyleRow = sqlx::query_as(&sql)
            .bind(style.id)
            .bind(&style.name)
            .bind(&style.slug)
            .bind(style.parent_id)
            .bind(&style.icon)
            .bind(&style.description)
            .bind(style.timestamps.created_at)
            .bind(style.timestamps.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("creating dance style", e))?;

        Ok(row.into())
    }

    async fn update(&self, style: &DanceStyle) -> Result<DanceStyle, DomainError> {
        let sql = format!(
            r#"
            UPDATE dance_styles
            SET name = $2, slug = $3, parent_id = $4, icon = $5, description = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            STYLE_COLUMNS
        );
        let row: Option<DanceStyleRow> = sqlx::query_as(&sql)
            .bind(style.id)
            .bind(&style.name)
            .bind(&style.slug)
            .bind(style.parent_id)
            .bind(&style.icon)
            .bind(&style.description)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("updating dance style", e))?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found("DanceStyle", style.id))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM dance_styles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting dance style", e))?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Vibe Infrastructure - PostgreSQL Menu Item Repository
// File: crates/vibe-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use vibe_core::domain::MenuItem;
use vibe_core::error::DomainError;
use vibe_core::repositories::TreeRepository;
use vibe_shared::types::Timestamps;

use crate::database::error::db_error;

const MENU_COLUMNS: &str = r#"id, name, slug, url, icon, "order", is_active, parent_id, created_at, updated_at"#;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, filter: &str, parent_id: Option<&Uuid>) -> Result<Vec<MenuItem>, DomainError> {
        let sql = format!("SELECT {} FROM menu_items {}", MENU_COLUMNS, filter);
        let mut query = sqlx::query_as::<_, MenuItemRow>(&sql);
        if let Some(parent_id) = parent_id {
            query = query.bind(parent_id);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing menu items", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub icon: String,
    pub order: i32,
    pub is_active: bool,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            slug: row.slug,
            url: row.url,
            icon: row.icon,
            order: row.order,
            is_active: row.is_active,
            parent_id: row.parent_id,
            timestamps: Timestamps {
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

#[async_trait]
impl TreeRepository<MenuItem> for PgMenuItemRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let sql = format!("SELECT {} FROM menu_items WHERE id = $1", MENU_COLUMNS);
        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding menu item by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<MenuItem>, DomainError> {
        let sql = format!("SELECT {} FROM menu_items WHERE slug = $1", MENU_COLUMNS);
        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding menu item by slug", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_roots(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.fetch_many("WHERE parent_id IS NULL", None).await
    }

    async fn find_children(&self, parent_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        self.fetch_many("WHERE parent_id = $1", Some(parent_id)).await
    }

    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.fetch_many("", None).await
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        info!("Creating menu item: {}", item.slug);

        let sql = format!(
            "INSERT INTO menu_items ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {}",
            MENU_COLUMNS, MENU_COLUMNS
        );
        let row: MenuItemRow = sqlx::query_as(&sql)
            .bind(item.id)
            .bind(&item.name)
            .bind(&item.slug)
            .bind(&item.url)
            .bind(&item.icon)
            .bind(item.order)
            .bind(item.is_active)
            .bind(item.parent_id)
            .bind(item.timestamps.created_at)
            .bind(item.timestamps.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("creating menu item", e))?;

        Ok(row.into())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let sql = format!(
            r#"
            UPDATE menu_items
            SET name = $2, slug = $3, url = $4, icon = $5, "order" = $6,
                is_active = $7, parent_id = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            MENU_COLUMNS
        );
        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(item.id)
            .bind(&item.name)
            .bind(&item.slug)
            .bind(&item.url)
            .bind(&item.icon)
            .bind(item.order)
            .bind(item.is_active)
            .bind(item.parent_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("updating menu item", e))?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found("MenuItem", item.id))
    }

    /// The subtree goes with the row (`ON DELETE CASCADE`).
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting menu item", e))?;

        Ok(result.rows_affected() > 0)
    }
}

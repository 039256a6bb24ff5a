// ============================================================================
// Vibe Infrastructure - PostgreSQL Site Configuration Repository
// File: crates/vibe-infrastructure/src/database/postgres/site_config_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use vibe_core::domain::SiteConfiguration;
use vibe_core::error::DomainError;
use vibe_core::repositories::SiteConfigRepository;

use crate::database::error::db_error;

pub struct PgSiteConfigRepository {
    pool: PgPool,
}

impl PgSiteConfigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SiteConfigRow {
    pub id: i32,
    pub site_name: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_video_url: String,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteConfigRow> for SiteConfiguration {
    fn from(row: SiteConfigRow) -> Self {
        SiteConfiguration {
            id: row.id,
            site_name: row.site_name,
            hero_title: row.hero_title,
            hero_subtitle: row.hero_subtitle,
            hero_video_url: row.hero_video_url,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl SiteConfigRepository for PgSiteConfigRepository {
    async fn fetch(&self, key: i32) -> Result<Option<SiteConfiguration>, DomainError> {
        let row: Option<SiteConfigRow> = sqlx::query_as(
            r#"
            SELECT id, site_name, hero_title, hero_subtitle, hero_video_url, updated_at
            FROM site_configuration
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetching site configuration", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn insert(&self, config: &SiteConfiguration) -> Result<SiteConfiguration, DomainError> {
        info!("Inserting site configuration row {}", config.id);

        let row: SiteConfigRow = sqlx::query_as(
            r#"
            INSERT INTO site_configuration (id, site_name, hero_title, hero_subtitle, hero_video_url, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, site_name, hero_title, hero_subtitle, hero_video_url, updated_at
            "#,
        )
        .bind(config.id)
        .bind(&config.site_name)
        .bind(&config.hero_title)
        .bind(&config.hero_subtitle)
        .bind(&config.hero_video_url)
        .bind(config.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("inserting site configuration", e))?;

        Ok(row.into())
    }

    async fn upsert(&self, config: &SiteConfiguration) -> Result<SiteConfiguration, DomainError> {
        let row: SiteConfigRow = sqlx::query_as(
            r#"
            INSERT INTO site_configuration (id, site_name, hero_title, hero_subtitle, hero_video_url, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET site_name = EXCLUDED.site_name,
                hero_title = EXCLUDED.hero_title,
                hero_subtitle = EXCLUDED.hero_subtitle,
                hero_video_url = EXCLUDED.hero_video_url,
                updated_at = EXCLUDED.updated_at
            RETURNING id, site_name, hero_title, hero_subtitle, hero_video_url, updated_at
            "#,
        )
        .bind(config.id)
        .bind(&config.site_name)
        .bind(&config.hero_title)
        .bind(&config.hero_subtitle)
        .bind(&config.hero_video_url)
        .bind(config.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("saving site configuration", e))?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM site_configuration")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting site configuration rows", e))?;

        Ok(count.0)
    }
}

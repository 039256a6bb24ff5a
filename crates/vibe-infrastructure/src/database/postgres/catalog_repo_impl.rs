// ============================================================================
// Vibe Infrastructure - PostgreSQL Catalog Repository
// File: crates/vibe-infrastructure/src/database/postgres/catalog_repo_impl.rs
// Description: Levels, professions, roles, courses (+ schedules), events (+ passes), products
// ============================================================================

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use vibe_core::domain::{
    Course, DanceProfession, Event, EventPass, EventType, Level, OrganizationRole, Product, Schedule,
};
use vibe_core::error::DomainError;
use vibe_core::repositories::CatalogRepository;
use vibe_shared::types::Timestamps;

use crate::database::error::db_error;

const LEVEL_COLUMNS: &str = r#"id, name, slug, "order", color, description, created_at, updated_at"#;
const COURSE_COLUMNS: &str =
    "id, name, slug, description, style_id, level_id, node_id, is_active, image, created_at, updated_at";
const EVENT_COLUMNS: &str = r#"
    id, name, slug, event_type, description, start_date, end_date,
    location_name, node_id, image, created_at, updated_at
"#;
const ROLE_COLUMNS: &str = "id, name, slug, description, created_at, updated_at";
const SCHEDULE_COLUMNS: &str = "id, course_id, day_of_week, start_time, end_time, location_name";
const PASS_COLUMNS: &str = "id, event_id, name, price_cents, quantity_available";
const PRODUCT_COLUMNS: &str = "id, name, slug, description, price_cents, stock, image, created_at, updated_at";

pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Schedules of the given courses, grouped by course id.
    async fn schedules_for(&self, course_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Schedule>>, DomainError> {
        let sql = format!("SELECT {} FROM schedules WHERE course_id = ANY($1)", SCHEDULE_COLUMNS);
        let rows: Vec<ScheduleRow> = sqlx::query_as(&sql)
        .bind(course_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing schedules", e))?;

        let mut grouped: HashMap<Uuid, Vec<Schedule>> = HashMap::new();
        for row in rows {
            grouped.entry(row.course_id).or_default().push(row.into());
        }
        Ok(grouped)
    }

    /// Passes of the given events, grouped by event id.
    async fn passes_for(&self, event_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<EventPass>>, DomainError> {
        let sql = format!("SELECT {} FROM event_passes WHERE event_id = ANY($1) ORDER BY price_cents", PASS_COLUMNS);
        let rows: Vec<EventPassRow> = sqlx::query_as(&sql)
        .bind(event_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing event passes", e))?;

        let mut grouped: HashMap<Uuid, Vec<EventPass>> = HashMap::new();
        for row in rows {
            grouped.entry(row.event_id).or_default().push(row.into());
        }
        Ok(grouped)
    }

    async fn attach_schedules(&self, rows: Vec<CourseRow>) -> Result<Vec<Course>, DomainError> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut schedules = self.schedules_for(&ids).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let slots = schedules.remove(&row.id).unwrap_or_default();
                row.into_course(slots)
            })
            .collect())
    }

    async fn attach_passes(&self, rows: Vec<EventRow>) -> Result<Vec<Event>, DomainError> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut passes = self.passes_for(&ids).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let event_passes = passes.remove(&row.id).unwrap_or_default();
                row.into_event(event_passes)
            })
            .collect())
    }
}

// Internal row types for SQLx mapping

#[derive(Debug, FromRow)]
struct LevelRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub order: i32,
    pub color: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LevelRow> for Level {
    fn from(row: LevelRow) -> Self {
        Level {
            id: row.id,
            name: row.name,
            slug: row.slug,
            order: row.order,
            color: row.color,
            description: row.description,
            timestamps: Timestamps { created_at: row.created_at, updated_at: row.updated_at },
        }
    }
}

#[derive(Debug, FromRow)]
struct ProfessionRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfessionRow> for DanceProfession {
    fn from(row: ProfessionRow) -> Self {
        DanceProfession {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            timestamps: Timestamps { created_at: row.created_at, updated_at: row.updated_at },
        }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoleRow> for OrganizationRole {
    fn from(row: RoleRow) -> Self {
        OrganizationRole {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            timestamps: Timestamps { created_at: row.created_at, updated_at: row.updated_at },
        }
    }
}

#[derive(Debug, FromRow)]
struct CourseRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub style_id: Uuid,
    pub level_id: Uuid,
    pub node_id: Uuid,
    pub is_active: bool,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseRow {
    fn into_course(self, schedules: Vec<Schedule>) -> Course {
        Course {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            style_id: self.style_id,
            level_id: self.level_id,
            node_id: self.node_id,
            is_active: self.is_active,
            image: self.image,
            schedules,
            timestamps: Timestamps { created_at: self.created_at, updated_at: self.updated_at },
        }
    }
}

#[derive(Debug, FromRow)]
struct ScheduleRow {
    pub id: Uuid,
    pub course_id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location_name: String,
}

impl From<ScheduleRow> for Schedule {
    fn from(row: ScheduleRow) -> Self {
        Schedule {
            id: row.id,
            course_id: row.course_id,
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            location_name: row.location_name,
        }
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub event_type: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location_name: String,
    pub node_id: Uuid,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EventRow {
    fn into_event(self, passes: Vec<EventPass>) -> Event {
        Event {
            id: self.id,
            name: self.name,
            slug: self.slug,
            event_type: EventType::from_str(&self.event_type).unwrap_or(EventType::Party),
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            location_name: self.location_name,
            node_id: self.node_id,
            image: self.image,
            passes,
            timestamps: Timestamps { created_at: self.created_at, updated_at: self.updated_at },
        }
    }
}

#[derive(Debug, FromRow)]
struct EventPassRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub quantity_available: i32,
}

impl From<EventPassRow> for EventPass {
    fn from(row: EventPassRow) -> Self {
        EventPass {
            id: row.id,
            event_id: row.event_id,
            name: row.name,
            price_cents: row.price_cents,
            quantity_available: row.quantity_available,
        }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: i32,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            price_cents: row.price_cents,
            stock: row.stock,
            image: row.image,
            timestamps: Timestamps { created_at: row.created_at, updated_at: row.updated_at },
        }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list_levels(&self) -> Result<Vec<Level>, DomainError> {
        let sql = format!("SELECT {} FROM levels", LEVEL_COLUMNS);
        let rows: Vec<LevelRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing levels", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_level(&self, slug: &str) -> Result<Option<Level>, DomainError> {
        let sql = format!("SELECT {} FROM levels WHERE slug = $1", LEVEL_COLUMNS);
        let row: Option<LevelRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding level by slug", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create_level(&self, level: &Level) -> Result<Level, DomainError> {
        info!("Creating level: {}", level.slug);

        let sql = format!(
            "INSERT INTO levels ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            LEVEL_COLUMNS, LEVEL_COLUMNS
        );
        let row: LevelRow = sqlx::query_as(&sql)
            .bind(level.id)
            .bind(&level.name)
            .bind(&level.slug)
            .bind(level.order)
            .bind(&level.color)
            .bind(&level.description)
            .bind(level.timestamps.created_at)
            .bind(level.timestamps.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("creating level", e))?;

        Ok(row.into())
    }

    async fn list_professions(&self) -> Result<Vec<DanceProfession>, DomainError> {
        let rows: Vec<ProfessionRow> = sqlx::query_as(
            "SELECT id, name, slug, description, created_at, updated_at FROM dance_professions",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing professions", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_profession(&self, slug: &str) -> Result<Option<DanceProfession>, DomainError> {
        let row: Option<ProfessionRow> = sqlx::query_as(
            "SELECT id, name, slug, description, created_at, updated_at FROM dance_professions WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding profession by slug", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_roles(&self) -> Result<Vec<OrganizationRole>, DomainError> {
        let sql = format!("SELECT {} FROM organization_roles", ROLE_COLUMNS);
        let rows: Vec<RoleRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing organization roles", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_role(&self, slug: &str) -> Result<Option<OrganizationRole>, DomainError> {
        let sql = format!("SELECT {} FROM organization_roles WHERE slug = $1", ROLE_COLUMNS);
        let row: Option<RoleRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding organization role by slug", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, DomainError> {
        let sql = format!("SELECT {} FROM courses", COURSE_COLUMNS);
        let rows: Vec<CourseRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing courses", e))?;

        self.attach_schedules(rows).await
    }

    async fn find_course(&self, slug: &str) -> Result<Option<Course>, DomainError> {
        let sql = format!("SELECT {} FROM courses WHERE slug = $1", COURSE_COLUMNS);
        let row: Option<CourseRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding course by slug", e))?;

        match row {
            Some(row) => Ok(self.attach_schedules(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn create_course(&self, course: &Course) -> Result<Course, DomainError> {
        info!("Creating course: {} ({} schedules)", course.slug, course.schedules.len());

        let mut transaction = self.pool.begin().await.map_err(|e| db_error("starting transaction", e))?;

        let sql = format!(
            "INSERT INTO courses ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING {}",
            COURSE_COLUMNS, COURSE_COLUMNS
        );
        let row: CourseRow = sqlx::query_as(&sql)
            .bind(course.id)
            .bind(&course.name)
            .bind(&course.slug)
            .bind(&course.description)
            .bind(course.style_id)
            .bind(course.level_id)
            .bind(course.node_id)
            .bind(course.is_active)
            .bind(&course.image)
            .bind(course.timestamps.created_at)
            .bind(course.timestamps.updated_at)
            .fetch_one(&mut *transaction)
            .await
            .map_err(|e| db_error("creating course", e))?;

        let sql = format!(
            "INSERT INTO schedules ({}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            SCHEDULE_COLUMNS, SCHEDULE_COLUMNS
        );
        let mut schedules = Vec::with_capacity(course.schedules.len());
        for slot in &course.schedules {
            let inserted: ScheduleRow = sqlx::query_as(&sql)
                .bind(slot.id)
                .bind(row.id)
                .bind(slot.day_of_week)
                .bind(slot.start_time)
                .bind(slot.end_time)
                .bind(&slot.location_name)
                .fetch_one(&mut *transaction)
                .await
                .map_err(|e| db_error("creating schedule", e))?;
            schedules.push(inserted.into());
        }

        transaction.commit().await.map_err(|e| db_error("committing course", e))?;
        Ok(row.into_course(schedules))
    }

    async fn list_events(&self) -> Result<Vec<Event>, DomainError> {
        let sql = format!("SELECT {} FROM events", EVENT_COLUMNS);
        let rows: Vec<EventRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing events", e))?;

        self.attach_passes(rows).await
    }

    async fn find_event(&self, slug: &str) -> Result<Option<Event>, DomainError> {
        let sql = format!("SELECT {} FROM events WHERE slug = $1", EVENT_COLUMNS);
        let row: Option<EventRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding event by slug", e))?;

        match row {
            Some(row) => Ok(self.attach_passes(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn create_event(&self, event: &Event) -> Result<Event, DomainError> {
        info!("Creating event: {} ({} passes)", event.slug, event.passes.len());

        let mut transaction = self.pool.begin().await.map_err(|e| db_error("starting transaction", e))?;

        let sql = format!(
            "INSERT INTO events ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING {}",
            EVENT_COLUMNS, EVENT_COLUMNS
        );
        let row: EventRow = sqlx::query_as(&sql)
            .bind(event.id)
            .bind(&event.name)
            .bind(&event.slug)
            .bind(event.event_type.as_str())
            .bind(&event.description)
            .bind(event.start_date)
            .bind(event.end_date)
            .bind(&event.location_name)
            .bind(event.node_id)
            .bind(&event.image)
            .bind(event.timestamps.created_at)
            .bind(event.timestamps.updated_at)
            .fetch_one(&mut *transaction)
            .await
            .map_err(|e| db_error("creating event", e))?;

        let sql = format!(
            "INSERT INTO event_passes ({}) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            PASS_COLUMNS, PASS_COLUMNS
        );
        let mut passes = Vec::with_capacity(event.passes.len());
        for pass in &event.passes {
            let inserted: EventPassRow = sqlx::query_as(&sql)
                .bind(pass.id)
                .bind(row.id)
                .bind(&pass.name)
                .bind(pass.price_cents)
                .bind(pass.quantity_available)
                .fetch_one(&mut *transaction)
                .await
                .map_err(|e| db_error("creating event pass", e))?;
            passes.push(inserted.into());
        }

        transaction.commit().await.map_err(|e| db_error("committing event", e))?;
        Ok(row.into_event(passes))
    }

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        let sql = format!("SELECT {} FROM products", PRODUCT_COLUMNS);
        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing products", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_product(&self, slug: &str) -> Result<Option<Product>, DomainError> {
        let sql = format!("SELECT {} FROM products WHERE slug = $1", PRODUCT_COLUMNS);
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding product by slug", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create_product(&self, product: &Product) -> Result<Product, DomainError> {
        info!("Creating product: {}", product.slug);

        let sql = format!(
            "INSERT INTO products ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {}",
            PRODUCT_COLUMNS, PRODUCT_COLUMNS
        );
        let row: ProductRow = sqlx::query_as(&sql)
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.slug)
            .bind(&product.description)
            .bind(product.price_cents)
            .bind(product.stock)
            .bind(&product.image)
            .bind(product.timestamps.created_at)
            .bind(product.timestamps.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("creating product", e))?;

        Ok(row.into())
    }
}

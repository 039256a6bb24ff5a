// ============================================================================
// Vibe Core - Seed Service
// File: crates/vibe-core/src/services/seed_service.rs
// ============================================================================
//! Idempotent loading of reference content (menu, organization, styles,
//! levels, courses, events, products, site configuration). Rows are matched
//! by slug. Existing rows are left untouched, except organization planets,
//! whose description and 3D parameters are refreshed.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use chrono::{Duration, NaiveTime, Utc};

use super::seed_data::{self, CourseSeed, EventSeed, MenuSeed, PlanetSeed};
use super::{CatalogService, SiteConfigService, TreeService};
use crate::domain::{Course, DanceStyle, Event, Level, MenuItem, NodeType, OrganizationNode, Product};
use crate::error::DomainError;
use crate::tree::TreeQuery;

/// Rows created vs. already present, per seeded collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub created: usize,
    pub existing: usize,
}

impl SeedReport {
    fn record(&mut self, created: bool) {
        if created {
            self.created += 1;
        } else {
            self.existing += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.existing
    }
}

pub struct SeedService {
    organization: Arc<TreeService<OrganizationNode>>,
    menu: Arc<TreeService<MenuItem>>,
    styles: Arc<TreeService<DanceStyle>>,
    catalog: Arc<CatalogService>,
    site_config: Arc<SiteConfigService>,
}

impl SeedService {
    pub fn new(
        organization: Arc<TreeService<OrganizationNode>>,
        menu: Arc<TreeService<MenuItem>>,
        styles: Arc<TreeService<DanceStyle>>,
        catalog: Arc<CatalogService>,
        site_config: Arc<SiteConfigService>,
    ) -> Self {
        Self { organization, menu, styles, catalog, site_config }
    }

    pub async fn run(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();
        for partial in [
            self.seed_menu().await?,
            self.seed_organization().await?,
            self.seed_dance_styles().await?,
            self.seed_levels().await?,
            self.seed_courses().await?,
            self.seed_events().await?,
            self.seed_products().await?,
        ] {
            report.created += partial.created;
            report.existing += partial.existing;
        }

        let config = self.site_config.load().await?;
        info!("Site configuration ready: {}", config.site_name);

        info!("Seeding finished: {} created, {} already present", report.created, report.existing);
        Ok(report)
    }

    pub async fn seed_menu(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();
        for section in seed_data::MENU {
            let (parent, created) = self.menu.get_or_create(&menu_item(section, None)?).await?;
            report.record(created);
            for child in section.children {
                let (_, created) = self.menu.get_or_create(&menu_item(child, Some(parent.id))?).await?;
                report.record(created);
            }
        }
        info!("Menu seeded: {} created, {} existing", report.created, report.existing);
        Ok(report)
    }

    pub async fn seed_organization(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();

        let (name, slug) = seed_data::ORGANIZATION_ROOT;
        let root = OrganizationNode::new(name.into(), slug.into(), NodeType::Root, None)?;
        let (root, created) = self.organization.get_or_create(&root).await?;
        report.record(created);

        let (school, created) = self.upsert_planet(&seed_data::SCHOOL, root.id).await?;
        report.record(created);

        for seed in seed_data::PLANETS {
            let (_, created) = self.upsert_planet(seed, school.id).await?;
            report.record(created);
        }
        info!("Organization seeded: {} created, {} existing", report.created, report.existing);
        Ok(report)
    }

    async fn upsert_planet(
        &self,
        seed: &PlanetSeed,
        parent_id: uuid::Uuid,
    ) -> Result<(OrganizationNode, bool), DomainError> {
        let node = planet(seed, parent_id)?;
        self.organization
            .update_or_create(&node, |existing| apply_planet(seed, existing))
            .await
    }

    pub async fn seed_dance_styles(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();
        for (name, slug, sub_styles) in seed_data::DANCE_STYLES {
            let style = DanceStyle::new((*name).into(), (*slug).into(), None)?;
            let (parent, created) = self.styles.get_or_create(&style).await?;
            report.record(created);
            for (sub_name, sub_slug) in *sub_styles {
                let sub = DanceStyle::new((*sub_name).into(), (*sub_slug).into(), Some(parent.id))?;
                let (_, created) = self.styles.get_or_create(&sub).await?;
                report.record(created);
            }
        }
        Ok(report)
    }

    pub async fn seed_levels(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();
        for (name, slug, order, color) in seed_data::LEVELS {
            let level = Level::new((*name).into(), (*slug).into(), *order, (*color).into())?;
            let (_, created) = self.catalog.get_or_create_level(&level).await?;
            report.record(created);
        }
        Ok(report)
    }

    /// Needs the styles, levels and organization seeded first.
    pub async fn seed_courses(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();
        for seed in seed_data::COURSES {
            let course = self.course(seed).await?;
            let (_, created) = self.catalog.get_or_create_course(&course).await?;
            report.record(created);
        }
        info!("Courses seeded: {} created, {} existing", report.created, report.existing);
        Ok(report)
    }

    /// Needs the organization seeded first.
    pub async fn seed_events(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();
        for seed in seed_data::EVENTS {
            let event = self.event(seed).await?;
            let (_, created) = self.catalog.get_or_create_event(&event).await?;
            report.record(created);
        }
        info!("Events seeded: {} created, {} existing", report.created, report.existing);
        Ok(report)
    }

    pub async fn seed_products(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();
        for (name, slug, description, price_cents, stock) in seed_data::PRODUCTS {
            let product = Product::new((*name).into(), (*slug).into(), (*description).into(), *price_cents, *stock)?;
            let (_, created) = self.catalog.get_or_create_product(&product).await?;
            report.record(created);
        }
        Ok(report)
    }

    async fn node_id(&self, slug: &str) -> Result<uuid::Uuid, DomainError> {
        let node = self.organization.get_by_slug(slug, &TreeQuery::with_depth(0)).await?;
        Ok(node.node.id)
    }

    async fn course(&self, seed: &CourseSeed) -> Result<Course, DomainError> {
        let style = self.styles.get_by_slug(seed.style, &TreeQuery::with_depth(0)).await?;
        let level = self.catalog.get_level(seed.level).await?;
        let node_id = self.node_id(seed.node).await?;

        let mut course = Course::new(seed.name.into(), seed.slug.into(), style.node.id, level.id, node_id)?;
        course.description = seed.description.into();
        for (day, start, end, location) in seed.schedules {
            course.add_schedule(*day, time(*start)?, time(*end)?, (*location).into())?;
        }
        Ok(course)
    }

    async fn event(&self, seed: &EventSeed) -> Result<Event, DomainError> {
        let node_id = self.node_id(seed.node).await?;
        let start = Utc::now() + Duration::days(seed.starts_in_days);
        let end = start + Duration::days(seed.duration_days);

        let mut event = Event::new(seed.name.into(), seed.slug.into(), seed.event_type, start, end, node_id)?;
        event.description = seed.description.into();
        event.location_name = seed.location_name.into();
        for (name, price_cents, quantity) in seed.passes {
            event.add_pass((*name).into(), *price_cents, *quantity)?;
        }
        Ok(event)
    }
}

fn time((hour, minute): (u32, u32)) -> Result<NaiveTime, DomainError> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| DomainError::ValidationError(format!("Invalid time: {}:{}", hour, minute)))
}

fn menu_item(seed: &MenuSeed, parent_id: Option<uuid::Uuid>) -> Result<MenuItem, DomainError> {
    MenuItem::new(
        seed.name.into(),
        seed.slug.into(),
        seed.url.into(),
        seed.icon.into(),
        seed.order,
        parent_id,
    )
}

fn planet(seed: &PlanetSeed, parent_id: uuid::Uuid) -> Result<OrganizationNode, DomainError> {
    let mut node = OrganizationNode::new(seed.name.into(), seed.slug.into(), seed.node_type, Some(parent_id))?;
    apply_planet(seed, &mut node)?;
    Ok(node)
}

/// Description and 3D parameters; name, type and parent stay as they are.
fn apply_planet(seed: &PlanetSeed, node: &mut OrganizationNode) -> Result<(), DomainError> {
    node.description = seed.description.into();
    node.planet_type = seed.planet_type;
    node.planet_color = seed.planet_color.into();
    node.orbit_radius = seed.orbit_radius;
    node.orbit_speed = seed.orbit_speed;
    node.planet_scale = seed.planet_scale;
    node.rotation_speed = seed.rotation_speed;
    node.orbit_phase = seed.orbit_phase;
    node.timestamps.touch();
    node.check()
}

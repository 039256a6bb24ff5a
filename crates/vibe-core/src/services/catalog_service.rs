//! Catalog listings: levels, professions, organization roles, courses,
//! events, products. Writes are get-or-create by slug, for seeding.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Course, DanceProfession, Event, Level, OrganizationRole, Product, Schedule};
use crate::error::DomainError;
use crate::repositories::CatalogRepository;

/// Optional narrowing for the event and product listings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CatalogFilter {
    /// Events: hide those already over.
    #[serde(default)]
    pub upcoming: bool,
    /// Products: hide those with no stock.
    #[serde(default)]
    pub in_stock: bool,
}

pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_levels(&self) -> Result<Vec<Level>, DomainError> {
        let mut levels = self.repo.list_levels().await?;
        Level::sort(&mut levels);
        Ok(levels)
    }

    pub async fn get_level(&self, slug: &str) -> Result<Level, DomainError> {
        found("Level", slug, self.repo.find_level(slug).await?)
    }

    /// Creates the level unless its slug is already taken. `true` when created.
    pub async fn get_or_create_level(&self, level: &Level) -> Result<(Level, bool), DomainError> {
        match self.repo.find_level(&level.slug).await? {
            Some(existing) => Ok((existing, false)),
            None => self.repo.create_level(level).await.map(|created| (created, true)),
        }
    }

    pub async fn list_professions(&self) -> Result<Vec<DanceProfession>, DomainError> {
        let mut professions = self.repo.list_professions().await?;
        professions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(professions)
    }

    pub async fn get_profession(&self, slug: &str) -> Result<DanceProfession, DomainError> {
        found("DanceProfession", slug, self.repo.find_profession(slug).await?)
    }

    pub async fn list_roles(&self) -> Result<Vec<OrganizationRole>, DomainError> {
        let mut roles = self.repo.list_roles().await?;
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    pub async fn get_role(&self, slug: &str) -> Result<OrganizationRole, DomainError> {
        found("OrganizationRole", slug, self.repo.find_role(slug).await?)
    }

    /// Active courses only, each with its schedule sorted by day and start time.
    pub async fn list_courses(&self) -> Result<Vec<Course>, DomainError> {
        let mut courses: Vec<Course> = self
            .repo
            .list_courses()
            .await?
            .into_iter()
            .filter(|course| course.is_active)
            .map(with_sorted_schedules)
            .collect();
        courses.sort_by(|a, b| a.name.cmp(&b.name));
        debug!("Listing {} active courses", courses.len());
        Ok(courses)
    }

    pub async fn get_course(&self, slug: &str) -> Result<Course, DomainError> {
        let course = self.repo.find_course(slug).await?.filter(|course| course.is_active);
        found("Course", slug, course).map(with_sorted_schedules)
    }

    /// Creates the course with its schedules unless the slug is taken.
    /// An existing course keeps its schedules.
    pub async fn get_or_create_course(&self, course: &Course) -> Result<(Course, bool), DomainError> {
        match self.repo.find_course(&course.slug).await? {
            Some(existing) => Ok((existing, false)),
            None => self.repo.create_course(course).await.map(|created| (created, true)),
        }
    }

    pub async fn list_events(&self, filter: &CatalogFilter) -> Result<Vec<Event>, DomainError> {
        let now = Utc::now();
        let mut events: Vec<Event> = self
            .repo
            .list_events()
            .await?
            .into_iter()
            .filter(|event| !filter.upcoming || event.is_upcoming(now))
            .collect();
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.name.cmp(&b.name)));
        Ok(events)
    }

    pub async fn get_event(&self, slug: &str) -> Result<Event, DomainError> {
        found("Event", slug, self.repo.find_event(slug).await?)
    }

    /// Creates the event with its passes unless the slug is taken.
    pub async fn get_or_create_event(&self, event: &Event) -> Result<(Event, bool), DomainError> {
        match self.repo.find_event(&event.slug).await? {
            Some(existing) => Ok((existing, false)),
            None => self.repo.create_event(event).await.map(|created| (created, true)),
        }
    }

    pub async fn list_products(&self, filter: &CatalogFilter) -> Result<Vec<Product>, DomainError> {
        let mut products: Vec<Product> = self
            .repo
            .list_products()
            .await?
            .into_iter()
            .filter(|product| !filter.in_stock || product.in_stock())
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    pub async fn get_product(&self, slug: &str) -> Result<Product, DomainError> {
        found("Product", slug, self.repo.find_product(slug).await?)
    }

    pub async fn get_or_create_product(&self, product: &Product) -> Result<(Product, bool), DomainError> {
        match self.repo.find_product(&product.slug).await? {
            Some(existing) => Ok((existing, false)),
            None => self.repo.create_product(product).await.map(|created| (created, true)),
        }
    }
}

fn found<T>(kind: &'static str, slug: &str, row: Option<T>) -> Result<T, DomainError> {
    row.ok_or_else(|| {
        warn!("{} not found for slug: {}", kind, slug);
        DomainError::not_found(kind, slug)
    })
}

fn with_sorted_schedules(mut course: Course) -> Course {
    Schedule::sort(&mut course.schedules);
    course
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventPass, EventType};
    use crate::repositories::MockCatalogRepository;
    use chrono::{Duration, NaiveTime};
    use uuid::Uuid;
    use vibe_shared::types::Timestamps;

    fn course(name: &str, active: bool) -> Course {
        let id = Uuid::new_v4();
        let slot = |day: i16, hour: u32| Schedule {
            id: Uuid::new_v4(),
            course_id: id,
            day_of_week: day,
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
            location_name: "Studio".into(),
        };
        Course {
            id,
            name: name.into(),
            slug: name.to_lowercase(),
            description: String::new(),
            style_id: Uuid::new_v4(),
            level_id: Uuid::new_v4(),
            node_id: Uuid::new_v4(),
            is_active: active,
            image: None,
            schedules: vec![slot(4, 20), slot(1, 19)],
            timestamps: Timestamps::now(),
        }
    }

    fn event(name: &str, days_from_now: i64) -> Event {
        let start = Utc::now() + Duration::days(days_from_now);
        Event {
            id: Uuid::new_v4(),
            name: name.into(),
            slug: name.to_lowercase(),
            event_type: EventType::Festival,
            description: String::new(),
            start_date: start,
            end_date: start + Duration::days(2),
            location_name: "Paris".into(),
            node_id: Uuid::new_v4(),
            image: None,
            passes: vec![EventPass {
                id: Uuid::new_v4(),
                event_id: Uuid::nil(),
                name: "Full Pass".into(),
                price_cents: 9_000,
                quantity_available: EventPass::UNLIMITED,
            }],
            timestamps: Timestamps::now(),
        }
    }

    #[tokio::test]
    async fn test_levels_sorted_by_order_then_name() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_levels().returning(|| {
            Ok(vec![
                Level::new("Avancé".into(), "avance".into(), 3, "#ef4444".into()).unwrap(),
                Level::new("Intermédiaire".into(), "intermediaire".into(), 2, "#10b981".into()).unwrap(),
                Level::new("Débutant".into(), "debutant".into(), 1, "#3b82f6".into()).unwrap(),
                Level::new("All levels".into(), "all".into(), 1, "#3b82f6".into()).unwrap(),
            ])
        });

        let service = CatalogService::new(Arc::new(repo));
        let slugs: Vec<String> = service.list_levels().await.unwrap().into_iter().map(|l| l.slug).collect();
        assert_eq!(slugs, vec!["all", "debutant", "intermediaire", "avance"]);
    }

    #[tokio::test]
    async fn test_courses_exclude_inactive_and_sort_schedules() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_courses()
            .returning(|| Ok(vec![course("Sensual", true), course("Archived", false), course("Moderna", true)]));

        let service = CatalogService::new(Arc::new(repo));
        let courses = service.list_courses().await.unwrap();
        let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Moderna", "Sensual"]);
        assert_eq!(courses[0].schedules[0].day_of_week, 1);
    }

    #[tokio::test]
    async fn test_inactive_course_lookup_is_not_found() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_course().returning(|_| Ok(Some(course("Archived", false))));

        let service = CatalogService::new(Arc::new(repo));
        let result = service.get_course("archived").await;
        assert!(matches!(result, Err(DomainError::NotFound { kind: "Course", .. })));
    }

    #[tokio::test]
    async fn test_upcoming_events_filter() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_events()
            .returning(|| Ok(vec![event("Summer Fest", 30), event("Past Party", -10), event("Workshop", 3)]));

        let service = CatalogService::new(Arc::new(repo));
        let all = service.list_events(&CatalogFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Past Party");

        let upcoming = service
            .list_events(&CatalogFilter { upcoming: true, ..CatalogFilter::default() })
            .await
            .unwrap();
        let names: Vec<&str> = upcoming.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Workshop", "Summer Fest"]);
    }

    #[tokio::test]
    async fn test_get_or_create_level_keeps_existing() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_level()
            .returning(|_| Ok(Some(Level::new("Débutant".into(), "debutant".into(), 1, "#3b82f6".into()).unwrap())));
        repo.expect_create_level().never();

        let service = CatalogService::new(Arc::new(repo));
        let level = Level::new("Débutant".into(), "debutant".into(), 1, "#3b82f6".into()).unwrap();
        let (_, created) = service.get_or_create_level(&level).await.unwrap();
        assert!(!created);
    }

    #[tokio::test]
    async fn test_roles_sorted_and_missing_role_not_found() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_roles().returning(|| {
            Ok(vec![
                OrganizationRole::new("Professeur".into(), "professeur".into(), String::new()).unwrap(),
                OrganizationRole::new("Bénévole".into(), "benevole".into(), String::new()).unwrap(),
            ])
        });
        repo.expect_find_role().returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repo));
        let slugs: Vec<String> = service.list_roles().await.unwrap().into_iter().map(|r| r.slug).collect();
        assert_eq!(slugs, vec!["benevole", "professeur"]);
        assert!(matches!(
            service.get_role("president").await,
            Err(DomainError::NotFound { kind: "OrganizationRole", .. })
        ));
    }

    #[tokio::test]
    async fn test_get_or_create_course_creates_when_missing() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_course().returning(|_| Ok(None));
        repo.expect_create_course().times(1).returning(|course| Ok(course.clone()));

        let service = CatalogService::new(Arc::new(repo));
        let (created, was_created) = service.get_or_create_course(&course("Sensual", true)).await.unwrap();
        assert!(was_created);
        assert_eq!(created.schedules.len(), 2);
    }

    #[tokio::test]
    async fn test_get_or_create_event_keeps_existing() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_event().returning(|_| Ok(Some(event("Summer Fest", 30))));
        repo.expect_create_event().never();

        let service = CatalogService::new(Arc::new(repo));
        let (_, created) = service.get_or_create_event(&event("Summer Fest", 30)).await.unwrap();
        assert!(!created);
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_product().returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repo));
        assert!(service.get_product("pull-noir").await.unwrap_err().is_not_found());
    }
}

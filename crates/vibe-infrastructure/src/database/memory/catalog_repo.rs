use async_trait::async_trait;
use tokio::sync::RwLock;

use vibe_core::domain::{Course, DanceProfession, Event, Level, OrganizationRole, Product};
use vibe_core::error::DomainError;
use vibe_core::repositories::CatalogRepository;

/// Flat catalog tables. Professions and roles have no write path through
/// the repository trait; `add_*` loads them.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    levels: RwLock<Vec<Level>>,
    professions: RwLock<Vec<DanceProfession>>,
    roles: RwLock<Vec<OrganizationRole>>,
    courses: RwLock<Vec<Course>>,
    events: RwLock<Vec<Event>>,
    products: RwLock<Vec<Product>>,
}

fn by_slug<'a, T: Clone + 'a>(
    rows: impl IntoIterator<Item = &'a T>,
    slug: &str,
    slug_of: impl Fn(&T) -> &str,
) -> Option<T> {
    rows.into_iter().find(|row| slug_of(*row) == slug).cloned()
}

/// Appends `row` unless its slug is taken, like the `UNIQUE` column would.
fn insert_unique<T: Clone>(
    rows: &mut Vec<T>,
    row: &T,
    kind: &str,
    slug_of: impl Fn(&T) -> &str,
) -> Result<T, DomainError> {
    let slug = slug_of(row);
    if rows.iter().any(|existing| slug_of(existing) == slug) {
        return Err(DomainError::ConstraintViolation(format!("{} slug already exists: {}", kind, slug)));
    }
    rows.push(row.clone());
    Ok(row.clone())
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_profession(&self, profession: DanceProfession) {
        self.professions.write().await.push(profession);
    }

    pub async fn add_role(&self, role: OrganizationRole) {
        self.roles.write().await.push(role);
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_levels(&self) -> Result<Vec<Level>, DomainError> {
        Ok(self.levels.read().await.clone())
    }

    async fn find_level(&self, slug: &str) -> Result<Option<Level>, DomainError> {
        Ok(by_slug(self.levels.read().await.iter(), slug, |l| l.slug.as_str()))
    }

    async fn create_level(&self, level: &Level) -> Result<Level, DomainError> {
        insert_unique(&mut *self.levels.write().await, level, "Level", |l| l.slug.as_str())
    }

    async fn list_professions(&self) -> Result<Vec<DanceProfession>, DomainError> {
        Ok(self.professions.read().await.clone())
    }

    async fn find_profession(&self, slug: &str) -> Result<Option<DanceProfession>, DomainError> {
        Ok(by_slug(self.professions.read().await.iter(), slug, |p| p.slug.as_str()))
    }

    async fn list_roles(&self) -> Result<Vec<OrganizationRole>, DomainError> {
        Ok(self.roles.read().await.clone())
    }

    async fn find_role(&self, slug: &str) -> Result<Option<OrganizationRole>, DomainError> {
        Ok(by_slug(self.roles.read().await.iter(), slug, |r| r.slug.as_str()))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, DomainError> {
        Ok(self.courses.read().await.clone())
    }

    async fn find_course(&self, slug: &str) -> Result<Option<Course>, DomainError> {
        Ok(by_slug(self.courses.read().await.iter(), slug, |c| c.slug.as_str()))
    }

    async fn create_course(&self, course: &Course) -> Result<Course, DomainError> {
        insert_unique(&mut *self.courses.write().await, course, "Course", |c| c.slug.as_str())
    }

    async fn list_events(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.events.read().await.clone())
    }

    async fn find_event(&self, slug: &str) -> Result<Option<Event>, DomainError> {
        Ok(by_slug(self.events.read().await.iter(), slug, |e| e.slug.as_str()))
    }

    async fn create_event(&self, event: &Event) -> Result<Event, DomainError> {
        insert_unique(&mut *self.events.write().await, event, "Event", |e| e.slug.as_str())
    }

    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_product(&self, slug: &str) -> Result<Option<Product>, DomainError> {
        Ok(by_slug(self.products.read().await.iter(), slug, |p| p.slug.as_str()))
    }

    async fn create_product(&self, product: &Product) -> Result<Product, DomainError> {
        insert_unique(&mut *self.products.write().await, product, "Product", |p| p.slug.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibe_core::services::{CatalogFilter, CatalogService};
    use vibe_shared::types::{new_id, Timestamps};

    fn product(name: &str, stock: i32) -> Product {
        Product::new(name.to_string(), name.to_lowercase().replace(' ', "-"), String::new(), 2_500, stock).unwrap()
    }

    #[tokio::test]
    async fn test_products_through_catalog_service() {
        let repo = std::sync::Arc::new(InMemoryCatalogRepository::new());
        repo.create_product(&product("T-shirt Vibe", 4)).await.unwrap();
        repo.create_product(&product("Sweat Noir", 0)).await.unwrap();
        let catalog = CatalogService::new(repo.clone());

        let in_stock = catalog
            .list_products(&CatalogFilter { in_stock: true, ..CatalogFilter::default() })
            .await
            .unwrap();
        assert_eq!(in_stock.len(), 1);
        assert_eq!(catalog.get_product("sweat-noir").await.unwrap().stock, 0);
    }

    #[tokio::test]
    async fn test_professions_and_duplicate_level() {
        let repo = InMemoryCatalogRepository::new();
        repo.add_profession(DanceProfession {
            id: new_id(),
            name: "DJ".to_string(),
            slug: "dj".to_string(),
            description: String::new(),
            timestamps: Timestamps::now(),
        })
        .await;
        assert!(repo.find_profession("dj").await.unwrap().is_some());

        let level = Level::new("Débutant".into(), "debutant".into(), 1, "#3b82f6".into()).unwrap();
        repo.create_level(&level).await.unwrap();
        assert!(matches!(repo.create_level(&level).await, Err(DomainError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_course_keeps_schedules_and_slug_is_unique() {
        let repo = InMemoryCatalogRepository::new();
        let mut course = Course::new(
            "Bachata Débutant - Lundi".into(),
            "bachata-debutant-lundi".into(),
            new_id(),
            new_id(),
            new_id(),
        )
        .unwrap();
        let at = |h| chrono::NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        course.add_schedule(0, at(19), at(20), "Studio Vibe".into()).unwrap();

        repo.create_course(&course).await.unwrap();
        let stored = repo.find_course("bachata-debutant-lundi").await.unwrap().unwrap();
        assert_eq!(stored.schedules.len(), 1);
        assert!(matches!(repo.create_course(&course).await, Err(DomainError::ConstraintViolation(_))));
    }
}

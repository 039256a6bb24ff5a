//! Catalog repository trait (port): flat read-mostly listings

use async_trait::async_trait;

use crate::domain::{Course, DanceProfession, Event, Level, OrganizationRole, Product};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_levels(&self) -> Result<Vec<Level>, DomainError>;
    async fn find_level(&self, slug: &str) -> Result<Option<Level>, DomainError>;
    async fn create_level(&self, level: &Level) -> Result<Level, DomainError>;

    async fn list_professions(&self) -> Result<Vec<DanceProfession>, DomainError>;
    async fn find_profession(&self, slug: &str) -> Result<Option<DanceProfession>, DomainError>;

    async fn list_roles(&self) -> Result<Vec<OrganizationRole>, DomainError>;
    async fn find_role(&self, slug: &str) -> Result<Option<OrganizationRole>, DomainError>;

    /// Courses come back with their schedules attached.
    async fn list_courses(&self) -> Result<Vec<Course>, DomainError>;
    async fn find_course(&self, slug: &str) -> Result<Option<Course>, DomainError>;
    /// Stores the course and its schedules together.
    async fn create_course(&self, course: &Course) -> Result<Course, DomainError>;

    /// Events come back with their passes attached.
    async fn list_events(&self) -> Result<Vec<Event>, DomainError>;
    async fn find_event(&self, slug: &str) -> Result<Option<Event>, DomainError>;
    /// Stores the event and its passes together.
    async fn create_event(&self, event: &Event) -> Result<Event, DomainError>;

    async fn list_products(&self) -> Result<Vec<Product>, DomainError>;
    async fn find_product(&self, slug: &str) -> Result<Option<Product>, DomainError>;
    async fn create_product(&self, product: &Product) -> Result<Product, DomainError>;
}

//! Site configuration repository trait (port)

use async_trait::async_trait;

use crate::domain::SiteConfiguration;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteConfigRepository: Send + Sync {
    async fn fetch(&self, key: i32) -> Result<Option<SiteConfiguration>, DomainError>;
    /// Fails with `ConstraintViolation` when a row with this key already exists.
    async fn insert(&self, config: &SiteConfiguration) -> Result<SiteConfiguration, DomainError>;
    async fn upsert(&self, config: &SiteConfiguration) -> Result<SiteConfiguration, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}

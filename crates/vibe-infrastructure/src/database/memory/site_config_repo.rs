use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use vibe_core::domain::SiteConfiguration;
use vibe_core::error::DomainError;
use vibe_core::repositories::SiteConfigRepository;

/// Configuration rows keyed by id, with primary-key semantics on insert.
#[derive(Default)]
pub struct InMemorySiteConfigRepository {
    rows: RwLock<HashMap<i32, SiteConfiguration>>,
}

impl InMemorySiteConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SiteConfigRepository for InMemorySiteConfigRepository {
    async fn fetch(&self, key: i32) -> Result<Option<SiteConfiguration>, DomainError> {
        Ok(self.rows.read().await.get(&key).cloned())
    }

    async fn insert(&self, config: &SiteConfiguration) -> Result<SiteConfiguration, DomainError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&config.id) {
            return Err(DomainError::ConstraintViolation(format!(
                "site configuration {} already exists",
                config.id
            )));
        }
        rows.insert(config.id, config.clone());
        Ok(config.clone())
    }

    async fn upsert(&self, config: &SiteConfiguration) -> Result<SiteConfiguration, DomainError> {
        self.rows.write().await.insert(config.id, config.clone());
        Ok(config.clone())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.rows.read().await.len() as i64)
    }
}

// ============================================================================
// Vibe Core - Site Configuration Service
// File: crates/vibe-core/src/services/site_config_service.rs
// ============================================================================
//! Single-instance accessor for the site configuration row.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::{SiteConfiguration, SITE_CONFIG_KEY};
use crate::error::DomainError;
use crate::repositories::SiteConfigRepository;

/// Owns lazy creation of the configuration row and pins every write to
/// [`SITE_CONFIG_KEY`].
pub struct SiteConfigService {
    repo: Arc<dyn SiteConfigRepository>,
}

impl SiteConfigService {
    pub fn new(repo: Arc<dyn SiteConfigRepository>) -> Self {
        Self { repo }
    }

    /// Get or create. A concurrent first access that loses the insert race
    /// resolves to the row the winner created.
    pub async fn load(&self) -> Result<SiteConfiguration, DomainError> {
        if let Some(config) = self.repo.fetch(SITE_CONFIG_KEY).await? {
            return Ok(config);
        }

        info!("Site configuration missing, creating defaults");
        match self.repo.insert(&SiteConfiguration::default()).await {
            Ok(created) => Ok(created),
            Err(DomainError::ConstraintViolation(reason)) => {
                warn!("Site configuration created concurrently ({}), re-reading", reason);
                self.repo.fetch(SITE_CONFIG_KEY).await?.ok_or_else(|| {
                    DomainError::InternalError("Site configuration vanished after insert conflict".into())
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Persists `config` as the configuration row, whatever id it carries.
    pub async fn save(&self, config: SiteConfiguration) -> Result<SiteConfiguration, DomainError> {
        config.validate()?;

        if config.id != SITE_CONFIG_KEY {
            debug!("Ignoring caller-supplied site configuration id {}", config.id);
        }
        let config = SiteConfiguration {
            id: SITE_CONFIG_KEY,
            updated_at: Utc::now(),
            ..config
        };

        let saved = self.repo.upsert(&config).await?;
        info!("Site configuration saved: {}", saved.site_name);
        Ok(saved)
    }

    /// The configuration row cannot be removed; this never touches the store.
    pub async fn delete(&self) -> Result<(), DomainError> {
        debug!("Ignoring request to delete the site configuration");
        Ok(())
    }
}

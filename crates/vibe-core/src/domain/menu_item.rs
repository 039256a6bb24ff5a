// ============================================================================
// Vibe Core - Menu Item Entity
// File: crates/vibe-core/src/domain/menu_item.rs
// Description: Navigation menu hierarchy
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use vibe_shared::types::{new_id, Timestamps};
use vibe_shared::utils::is_valid_slug;

use crate::error::DomainError;
use crate::tree::{EntityKind, OnParentDelete, OrderKey, TreeEntity, TreePolicy};

/// Menu Item entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Menu name must be between 1 and 100 characters"))]
    pub name: String,

    pub slug: String,

    #[validate(length(min = 1, max = 255, message = "Menu URL must be between 1 and 255 characters"))]
    pub url: String,

    #[validate(length(max = 50, message = "Menu icon too long"))]
    pub icon: String,

    pub order: i32,
    pub is_active: bool,

    #[serde(rename = "parent")]
    pub parent_id: Option<Uuid>,

    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl MenuItem {
    pub fn new(
        name: String,
        slug: String,
        url: String,
        icon: String,
        order: i32,
        parent_id: Option<Uuid>,
    ) -> Result<Self, DomainError> {
        let item = Self {
            id: new_id(),
            name: name.trim().to_string(),
            slug: slug.trim().to_lowercase(),
            url: url.trim().to_string(),
            icon: icon.trim().to_string(),
            order,
            is_active: true,
            parent_id,
            timestamps: Timestamps::now(),
        };

        item.check()?;
        Ok(item)
    }

    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()?;
        if !is_valid_slug(&self.slug) {
            return Err(DomainError::ValidationError(format!("Invalid slug: {}", self.slug)));
        }
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.timestamps.touch();
    }
}

impl TreeEntity for MenuItem {
    const KIND: EntityKind = EntityKind::MenuItem;
    const ON_PARENT_DELETE: OnParentDelete = OnParentDelete::Cascade;

    fn id(&self) -> Uuid {
        self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    fn set_parent_id(&mut self, parent_id: Option<Uuid>) {
        self.parent_id = parent_id;
        self.timestamps.touch();
    }

    fn policy() -> TreePolicy<Self> {
        TreePolicy {
            child_filter: |item| item.is_active,
            order_key: OrderKey::SequenceThenName(|item| item.order),
        }
    }
}

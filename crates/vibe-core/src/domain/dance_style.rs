//! Dance style entity. Styles nest into sub-styles (Bachata → Bachata Sensual).

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use vibe_shared::types::{new_id, Timestamps};
use vibe_shared::utils::is_valid_slug;

use crate::error::DomainError;
use crate::tree::{EntityKind, OnParentDelete, TreeEntity, TreePolicy};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DanceStyle {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Style name must be between 1 and 100 characters"))]
    pub name: String,

    pub slug: String,

    #[serde(rename = "parent")]
    pub parent_id: Option<Uuid>,

    #[validate(length(max = 50, message = "Style icon too long"))]
    pub icon: String,

    pub description: String,

    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl DanceStyle {
    pub fn new(name: String, slug: String, parent_id: Option<Uuid>) -> Result<Self, DomainError> {
        let style = Self {
            id: new_id(),
            name: name.trim().to_string(),
            slug: slug.trim().to_lowercase(),
            parent_id,
            icon: String::new(),
            description: String::new(),
            timestamps: Timestamps::now(),
        };

        style.check()?;
        Ok(style)
    }

    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()?;
        if !is_valid_slug(&self.slug) {
            return Err(DomainError::ValidationError(format!("Invalid slug: {}", self.slug)));
        }
        Ok(())
    }
}

impl TreeEntity for DanceStyle {
    const KIND: EntityKind = EntityKind::DanceStyle;
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
        TreePolicy::all_by_name()
    }
}

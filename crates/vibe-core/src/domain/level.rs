//! Skill level entity (flat, ordered)

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vibe_shared::types::{new_id, Timestamps};
use vibe_shared::utils::{is_valid_hex_color, is_valid_slug};

use crate::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub order: i32,
    pub color: String,
    pub description: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Level {
    pub fn new(name: String, slug: String, order: i32, color: String) -> Result<Self, DomainError> {
        if !is_valid_slug(&slug) {
            return Err(DomainError::ValidationError(format!("Invalid slug: {}", slug)));
        }
        if !is_valid_hex_color(&color) {
            return Err(DomainError::ValidationError(format!("Invalid level color: {}", color)));
        }
        Ok(Self {
            id: new_id(),
            name,
            slug,
            order,
            color,
            description: String::new(),
            timestamps: Timestamps::now(),
        })
    }

    /// `order` ascending, ties by name.
    pub fn sort(levels: &mut [Level]) {
        levels.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
    }
}

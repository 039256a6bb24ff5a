//! Shop product entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vibe_shared::types::{new_id, Timestamps};
use vibe_shared::utils::is_valid_slug;

use crate::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Minor currency units.
    pub price_cents: i64,
    pub stock: i32,
    pub image: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Product {
    pub fn new(
        name: String,
        slug: String,
        description: String,
        price_cents: i64,
        stock: i32,
    ) -> Result<Self, DomainError> {
        if !is_valid_slug(&slug) {
            return Err(DomainError::ValidationError(format!("Invalid slug: {}", slug)));
        }
        if price_cents < 0 || stock < 0 {
            return Err(DomainError::ValidationError(format!("Invalid price or stock for {}", slug)));
        }
        Ok(Self {
            id: new_id(),
            name,
            slug,
            description,
            price_cents,
            stock,
            image: None,
            timestamps: Timestamps::now(),
        })
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

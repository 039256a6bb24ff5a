//! Common types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Creation/modification stamps carried by every catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn now() -> Self {
        let now = Utc::now();
        Self { created_at: now, updated_at: now }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self::now()
    }
}

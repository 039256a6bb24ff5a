//! Dance profession entity (instructor, DJ, photographer...)

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vibe_shared::types::Timestamps;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DanceProfession {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

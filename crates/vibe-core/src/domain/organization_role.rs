//! Organization role entity (president, instructor, volunteer...)

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vibe_shared::types::{new_id, Timestamps};
use vibe_shared::utils::is_valid_slug;

use crate::error::DomainError;

/// A role a member can hold on an organization node. Roles are global;
/// the member/node assignment is not part of the public read model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationRole {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl OrganizationRole {
    pub fn new(name: String, slug: String, description: String) -> Result<Self, DomainError> {
        if !is_valid_slug(&slug) {
            return Err(DomainError::ValidationError(format!("Invalid slug: {}", slug)));
        }
        Ok(Self {
            id: new_id(),
            name: name.trim().to_string(),
            slug,
            description,
            timestamps: Timestamps::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_role_rejects_bad_slug() {
        assert!(OrganizationRole::new("Professeur".into(), "professeur".into(), String::new()).is_ok());
        assert!(matches!(
            OrganizationRole::new("Professeur".into(), "Pro fesseur".into(), String::new()),
            Err(DomainError::ValidationError(_))
        ));
    }
}

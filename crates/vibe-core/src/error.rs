//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("Cycle detected in {kind} tree at node {id}")]
    CycleDetected { kind: &'static str, id: Uuid },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid parent: {0}")]
    InvalidParent(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        DomainError::NotFound { kind, key: key.to_string() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}

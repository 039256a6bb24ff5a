use tracing::error;
use vibe_core::error::DomainError;

/// Logs a failed query and maps it onto the domain error space.
/// Unique violations become `ConstraintViolation`, foreign key violations
/// `InvalidParent`.
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::ConstraintViolation(db.message().to_string())
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            DomainError::InvalidParent(db.message().to_string())
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}

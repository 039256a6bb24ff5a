//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use vibe_core::error::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Data integrity error: {0}")]
    IntegrityError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DomainError::CycleDetected { .. } => ApiError::IntegrityError(err.to_string()),
            DomainError::ConstraintViolation(_)
            | DomainError::InvalidParent(_)
            | DomainError::ValidationError(_) => ApiError::BadRequest(err.to_string()),
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            DomainError::InternalError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
            }
            ApiError::IntegrityError(msg) => {
                tracing::error!("Data integrity error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTEGRITY_ERROR", msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", "Database unavailable".to_string())
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        (status, Json(ApiResponse::<()>::error(code, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_domain_error_status_codes() {
        let cases = [
            (DomainError::not_found("DanceStyle", "tango"), StatusCode::NOT_FOUND),
            (DomainError::CycleDetected { kind: "MenuItem", id: Uuid::nil() }, StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::ConstraintViolation("dup".into()), StatusCode::BAD_REQUEST),
            (DomainError::InvalidParent("self".into()), StatusCode::BAD_REQUEST),
            (DomainError::DatabaseError("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }
}

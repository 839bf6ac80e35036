//! HTTP-facing error type.
//!
//! Domain errors carry no HTTP semantics; this module decides the status
//! code for each of them. Every error body has the shape
//! `{"message": "<detail>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::MappingError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Maps any failure of a create request to 409 Conflict.
    pub fn from_create(error: MappingError) -> Self {
        Self::conflict(error.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Lookup-side mapping used by resolve and delete.
impl From<MappingError> for AppError {
    fn from(error: MappingError) -> Self {
        match error {
            MappingError::InvalidCode(_) | MappingError::NotFound(_) => {
                AppError::not_found(error.to_string())
            }
            MappingError::Validation(_) => AppError::conflict(error.to_string()),
            MappingError::Storage(_) | MappingError::CodeExhausted(_) => {
                AppError::internal(error.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_map_to_not_found() {
        let invalid: AppError = MappingError::InvalidCode("x".to_string()).into();
        let missing: AppError = MappingError::NotFound("x".to_string()).into();

        assert_eq!(invalid.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_errors_map_to_internal() {
        let err: AppError = MappingError::Storage(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_create_errors_map_to_conflict() {
        let validation = AppError::from_create(MappingError::Validation("bad".to_string()));
        let storage = AppError::from_create(MappingError::Storage(sqlx::Error::PoolTimedOut));

        assert_eq!(validation.status(), StatusCode::CONFLICT);
        assert_eq!(storage.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("mapping not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}

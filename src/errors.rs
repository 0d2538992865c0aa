//! Error types for superheroes operations.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::validate::ValidationError;

/// Errors that can occur during data store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataStoreError {
    /// The requested item was not found in the data store.
    NotFound,
    /// A write was rejected because a field failed validation.
    Validation(ValidationError),
    /// A write referenced a hero or power that does not exist.
    ForeignKeyViolation(String),
    /// An internal storage system error occurred.
    Internal(String),
}

impl std::fmt::Display for DataStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Item not found in data store"),
            Self::Validation(err) => write!(f, "{}", err),
            Self::ForeignKeyViolation(msg) => write!(f, "{}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<sqlx::Error> for DataStoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => DataStoreError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                DataStoreError::ForeignKeyViolation(db_err.message().to_string())
            }
            _ => DataStoreError::Internal(e.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DataStoreError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        DataStoreError::Internal(e.to_string())
    }
}

impl From<ValidationError> for DataStoreError {
    fn from(e: ValidationError) -> Self {
        DataStoreError::Validation(e)
    }
}

impl std::error::Error for DataStoreError {}

////////////////////////////////////////////// ApiError //////////////////////////////////////////////

/// Errors surfaced to HTTP clients.
///
/// `NotFound` renders as `404 {"error": ...}` and `BadRequest` as `400 {"errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The addressed record does not exist.
    NotFound(String),
    /// The request was missing fields, failed validation, or could not be stored.
    BadRequest(Vec<String>),
}

impl ApiError {
    /// Builds a `BadRequest` carrying a single message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(vec![message.into()])
    }

    /// Builds a `NotFound` with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "{}", msg),
            Self::BadRequest(errors) => write!(f, "{}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::BadRequest(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
        }
    }
}

impl From<DataStoreError> for ApiError {
    fn from(e: DataStoreError) -> Self {
        match e {
            DataStoreError::NotFound => ApiError::not_found("Record not found"),
            DataStoreError::Validation(err) => ApiError::bad_request(err.to_string()),
            DataStoreError::ForeignKeyViolation(msg) => ApiError::bad_request(msg),
            DataStoreError::Internal(msg) => {
                tracing::error!(error = %msg, "storage failure");
                ApiError::bad_request(msg)
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::from(DataStoreError::from(e))
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::bad_request(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_becomes_bad_request() {
        let err = ApiError::from(DataStoreError::Validation(
            ValidationError::DescriptionTooShort,
        ));
        assert_eq!(
            err,
            ApiError::BadRequest(vec![
                "Description must be at least 20 characters long".to_string()
            ])
        );
    }

    #[test]
    fn foreign_key_violation_becomes_bad_request() {
        let err = ApiError::from(DataStoreError::ForeignKeyViolation(
            "Hero 7 does not exist".to_string(),
        ));
        assert_eq!(err, ApiError::bad_request("Hero 7 does not exist"));
    }

    #[test]
    fn not_found_renders_404() {
        let response = ApiError::not_found("Hero not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_renders_400() {
        let response = ApiError::bad_request("description is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert_eq!(
            DataStoreError::from(sqlx::Error::RowNotFound),
            DataStoreError::NotFound
        );
    }
}

pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::http::request_path::current_request_path;

pub const VALIDATION_ERROR: &str = "Validation Error";
pub const VALIDATION_MESSAGE: &str = "Error on validation attributes";

/// One violated rule on one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// Standard error envelope returned for every failed request.
///
/// # JSON Example
///
/// ```json
/// {
///   "timestamp": "2024-05-01T10:00:00Z",
///   "path": "/api/users",
///   "status": 400,
///   "error": "Validation Error",
///   "message": "Error on validation attributes",
///   "errors": [
///     { "fieldName": "email", "message": "invalid email" }
///   ]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    /// Path of the request that failed
    pub path: String,
    pub status: u16,
    /// Short label of the failure class, e.g. "Not Found"
    pub error: String,
    pub message: String,
    /// Present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    /// Envelope stamped with the current time and the in-flight request path.
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            path: current_request_path().unwrap_or_default(),
            status: status.as_u16(),
            error: error.into(),
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation error: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),
}

fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Error")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::Validation(errors) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    violations = errors.len(),
                    "Validation error: {:?}",
                    errors
                );
                ErrorResponse::new(StatusCode::BAD_REQUEST, VALIDATION_ERROR, VALIDATION_MESSAGE)
                    .with_errors(errors)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                let status = e.status();
                ErrorResponse::new(status, reason(status), e.body_text())
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                let status = StatusCode::NOT_FOUND;
                ErrorResponse::new(status, reason(status), msg)
            }
            AppError::Store(msg) => {
                tracing::error!(error_code = ErrorCode::StoreError.code(), "Store error: {}", msg);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                ErrorResponse::new(status, reason(status), "A store error occurred")
            }
        };

        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

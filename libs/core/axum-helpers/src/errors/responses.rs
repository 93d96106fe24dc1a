//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-05-01T10:00:00Z",
        "path": "/api/users",
        "status": 400,
        "error": "Validation Error",
        "message": "Error on validation attributes",
        "errors": [
            { "fieldName": "email", "message": "invalid email" }
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-05-01T10:00:00Z",
        "path": "/api/users/663a1f0c2b7e4a1d9c8b4567",
        "status": 404,
        "error": "Not Found",
        "message": "Object not found. Id: 663a1f0c2b7e4a1d9c8b4567, Type: User"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-05-01T10:00:00Z",
        "path": "/api/users",
        "status": 500,
        "error": "Internal Server Error",
        "message": "A store error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

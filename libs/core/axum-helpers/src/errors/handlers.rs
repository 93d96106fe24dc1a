use axum::{
    Json,
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    let mut body = ErrorResponse::new(
        StatusCode::NOT_FOUND,
        "Not Found",
        "The requested resource was not found",
    );
    body.path = uri.path().to_string();

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

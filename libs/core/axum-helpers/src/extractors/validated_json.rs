//! JSON extractor that runs field validation before the handler sees the body.

use crate::errors::{AppError, FieldError};
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Field-level validation of a deserialized request body.
///
/// Implementations return every violation, in a stable order. An empty
/// vector means the body is valid. Used instead of `validator::Validate`,
/// whose `ValidationErrors` is keyed by field and loses that order.
pub trait FieldValidate {
    fn field_errors(&self) -> Vec<FieldError>;
}

/// JSON extractor with automatic validation.
///
/// Rejects with [`AppError::JsonExtractorRejection`] when the body cannot be
/// parsed and with [`AppError::Validation`] when [`FieldValidate`] reports
/// violations.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::{FieldError, FieldValidate, ValidatedJson};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateUser {
///     name: String,
/// }
///
/// impl FieldValidate for CreateUser {
///     fn field_errors(&self) -> Vec<FieldError> {
///         if self.name.is_empty() {
///             vec![FieldError::new("name", "must not be empty")]
///         } else {
///             vec![]
///         }
///     }
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.name)
/// }
///
/// let app = Router::new().route("/users", post(create_user));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + FieldValidate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;

        let errors = data.field_errors();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{StatusCode, header},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        code: String,
    }

    impl FieldValidate for Payload {
        fn field_errors(&self) -> Vec<FieldError> {
            if self.code.starts_with(' ') {
                vec![FieldError::new("code", "leading space")]
            } else {
                vec![]
            }
        }
    }

    async fn handler(ValidatedJson(payload): ValidatedJson<Payload>) -> String {
        payload.code
    }

    fn app() -> Router {
        Router::new().route("/", post(handler))
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_reaches_handler() {
        let response = app().oneshot(json_request(r#"{"code":"abc"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_field_is_rejected_with_400() {
        let response = app().oneshot(json_request(r#"{"code":" abc"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_before_validation() {
        let response = app().oneshot(json_request(r#"{}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let response = app().oneshot(json_request("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

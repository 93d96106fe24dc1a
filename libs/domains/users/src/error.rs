use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Object not found. Id: {id}, Type: {entity}")]
    ObjectNotFound { id: String, entity: &'static str },

    /// Any fault reported by the document store
    #[error("Store error: {0}")]
    Store(String),
}

impl UserError {
    pub fn not_found(id: impl Into<String>) -> Self {
        UserError::ObjectNotFound {
            id: id.into(),
            entity: "User",
        }
    }
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            not_found @ UserError::ObjectNotFound { .. } => {
                AppError::NotFound(not_found.to_string())
            }
            UserError::Store(msg) => AppError::Store(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Store(err.to_string())
    }
}

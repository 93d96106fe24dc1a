use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted user document.
///
/// `id` is assigned by the store on first save and stored as the document `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Inbound body for create and update. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserRequest {
    #[schema(example = "Rafael")]
    pub name: String,
    #[schema(example = "rafael@mail.com")]
    pub email: String,
    #[schema(example = "123")]
    pub password: String,
}

impl UserRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Read projection of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "663a1f0c2b7e4a1d9c8b4567")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
}

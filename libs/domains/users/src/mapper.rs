use crate::models::{User, UserRequest, UserResponse};

/// Conversions between request bodies, stored users and responses.
#[cfg_attr(test, mockall::automock)]
pub trait UserMapper: Send + Sync {
    /// New, unsaved user from a validated request.
    fn to_entity(&self, request: UserRequest) -> User;

    /// `existing` with every request field overwritten; the id is kept.
    fn to_updated_entity(&self, request: UserRequest, existing: User) -> User;

    fn to_response(&self, user: User) -> UserResponse;
}

/// Copies fields one to one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldCopyMapper;

impl UserMapper for FieldCopyMapper {
    fn to_entity(&self, request: UserRequest) -> User {
        User {
            id: None,
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }

    fn to_updated_entity(&self, request: UserRequest, existing: User) -> User {
        User {
            id: existing.id,
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }

    fn to_response(&self, user: User) -> UserResponse {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}

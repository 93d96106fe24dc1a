//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::mapper::{FieldCopyMapper, UserMapper};
use crate::models::{User, UserRequest};
use crate::repository::{UserRepository, UserStream};

/// User service orchestrating mapping, store access and not-found detection.
///
/// Requests reaching the service are already validated by the HTTP layer.
pub struct UserService<R: UserRepository, M: UserMapper = FieldCopyMapper> {
    repository: Arc<R>,
    mapper: Arc<M>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the field-copy mapper
    pub fn new(repository: R) -> Self {
        Self::with_mapper(repository, FieldCopyMapper)
    }
}

impl<R: UserRepository, M: UserMapper> UserService<R, M> {
    pub fn with_mapper(repository: R, mapper: M) -> Self {
        Self {
            repository: Arc::new(repository),
            mapper: Arc::new(mapper),
        }
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    #[instrument(skip(self, request))]
    pub async fn save(&self, request: UserRequest) -> UserResult<User> {
        let user = self.mapper.to_entity(request);
        self.repository.save(user).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::not_found(id))
    }

    /// Stream every stored user; an empty store yields an empty stream.
    pub fn find_all(&self) -> UserStream {
        self.repository.find_all()
    }

    /// Overwrite every field of an existing user.
    ///
    /// Fails with `ObjectNotFound` without writing when `id` is unknown.
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: &str, request: UserRequest) -> UserResult<User> {
        let existing = self.find_by_id(id).await?;
        let user = self.mapper.to_updated_entity(request, existing);
        self.repository.save(user).await
    }

    /// Remove and return the user; `None` when nothing had that id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> UserResult<Option<User>> {
        self.repository.find_and_remove(id).await
    }
}

impl<R: UserRepository, M: UserMapper> Clone for UserService<R, M> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            mapper: Arc::clone(&self.mapper),
        }
    }
}

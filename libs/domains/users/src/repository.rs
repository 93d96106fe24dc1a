use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::User;

/// Lazy, forward-only sequence of stored users.
pub type UserStream = BoxStream<'static, UserResult<User>>;

/// Repository trait for User persistence
///
/// Single-key operations against a document store. Implementations own id
/// assignment; callers never invent ids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert when `user.id` is `None` (assigning a fresh id), otherwise
    /// overwrite the document with that id.
    async fn save(&self, user: User) -> UserResult<User>;

    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// Every call opens a new cursor.
    fn find_all(&self) -> UserStream;

    /// Atomically remove and return the document with `id`.
    async fn find_and_remove(&self, id: &str) -> UserResult<Option<User>>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> UserResult<User> {
        let id = user
            .id
            .get_or_insert_with(|| ObjectId::new().to_hex())
            .clone();

        self.users.write().await.insert(id.clone(), user.clone());

        tracing::debug!(user_id = %id, "Saved user");
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    fn find_all(&self) -> UserStream {
        let users = Arc::clone(&self.users);

        stream::once(async move {
            let snapshot: Vec<User> = users.read().await.values().cloned().collect();
            stream::iter(snapshot.into_iter().map(Ok))
        })
        .flatten()
        .boxed()
    }

    async fn find_and_remove(&self, id: &str) -> UserResult<Option<User>> {
        Ok(self.users.write().await.remove(id))
    }
}

//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use futures::{StreamExt, TryFutureExt, TryStreamExt};
use mongodb::{Collection, Database, bson::doc, bson::oid::ObjectId};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::{UserRepository, UserStream};

pub const DEFAULT_COLLECTION: &str = "user";

/// MongoDB implementation of the UserRepository
///
/// Ids are `ObjectId` hex strings stored in `_id`.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a repository over the `user` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoUserRepository::new(client.database("users"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<User>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(user_id = ?user.id))]
    async fn save(&self, mut user: User) -> UserResult<User> {
        let id = user
            .id
            .get_or_insert_with(|| ObjectId::new().to_hex())
            .clone();

        self.collection
            .replace_one(doc! { "_id": &id }, &user)
            .upsert(true)
            .await?;

        tracing::info!(user_id = %id, "User saved");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let user = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(user)
    }

    fn find_all(&self) -> UserStream {
        let collection = self.collection.clone();

        // The cursor pulls batches from the server only as the stream is polled.
        async move { collection.find(doc! {}).await }
            .map_ok(|cursor| cursor.map_err(UserError::from))
            .map_err(UserError::from)
            .try_flatten_stream()
            .boxed()
    }

    #[instrument(skip(self))]
    async fn find_and_remove(&self, id: &str) -> UserResult<Option<User>> {
        let removed = self.collection.find_one_and_delete(doc! { "_id": id }).await?;

        if removed.is_some() {
            tracing::info!(user_id = %id, "User removed");
        }
        Ok(removed)
    }
}

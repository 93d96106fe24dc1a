//! Runs the MongoDB repository against a real server started with testcontainers.

use domain_users::{
    MongoUserRepository, User, UserError, UserRepository, UserRequest, UserService,
};
use futures::TryStreamExt;
use test_utils::{TestDataBuilder, TestMongo, assertions::assert_some};

fn request(builder: &TestDataBuilder, suffix: &str) -> UserRequest {
    UserRequest::new(builder.name("user", suffix), builder.email(suffix), "123")
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_mongo_save_find_update_delete() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_mongo_save_find_update_delete");
    let service = UserService::new(MongoUserRepository::new(
        mongo.database(&builder.database_name()),
    ));

    let saved = service.save(request(&builder, "main")).await.unwrap();
    let id = assert_some(saved.id.clone(), "saved user id");
    assert_eq!(id.len(), 24);

    let found = service.find_by_id(&id).await.unwrap();
    assert_eq!(found, saved);

    let updated = service
        .update(&id, UserRequest::new("rafael", "rafael@mail.com", "456"))
        .await
        .unwrap();
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));
    assert_eq!(service.find_by_id(&id).await.unwrap().email, "rafael@mail.com");

    let removed = service.delete(&id).await.unwrap();
    assert_eq!(removed, Some(updated));
    assert!(matches!(
        service.find_by_id(&id).await,
        Err(UserError::ObjectNotFound { .. })
    ));
    assert_eq!(service.delete(&id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_mongo_find_all_streams_every_document() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_mongo_find_all_streams_every_document");
    let repository = MongoUserRepository::new(mongo.database(&builder.database_name()));

    let empty: Vec<User> = repository.find_all().try_collect().await.unwrap();
    assert!(empty.is_empty());

    for suffix in ["a", "b", "c"] {
        repository
            .save(User {
                id: None,
                name: builder.name("user", suffix),
                email: builder.email(suffix),
                password: "123".to_string(),
            })
            .await
            .unwrap();
    }

    let all: Vec<User> = repository.find_all().try_collect().await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|user| user.id.is_some()));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_mongo_update_missing_id_does_not_upsert() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_mongo_update_missing_id_does_not_upsert");
    let repository = MongoUserRepository::with_collection(
        mongo.database(&builder.database_name()),
        "users_custom",
    );
    let service = UserService::new(repository.clone());

    let missing = builder.object_id();
    let result = service.update(&missing, request(&builder, "main")).await;

    assert!(matches!(result, Err(UserError::ObjectNotFound { ref id, .. }) if *id == missing));
    assert_eq!(repository.collection().count_documents(mongodb::bson::doc! {}).await.unwrap(), 0);
}

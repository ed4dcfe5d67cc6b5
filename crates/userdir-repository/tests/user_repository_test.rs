//! Integration tests for SqlUserRepository.
//!
//! These run against SQLite, in memory or in a temporary file.

mod common;

use common::TestDatabase;
use userdir_config::DatabaseConfig;
use userdir_core::{NewUser, User, UserId};
use userdir_repository::{SqlUserRepository, UserRepository};

fn ada() -> NewUser {
    NewUser::new("Ada", "Lovelace", "ada@x.com")
}

fn grace() -> NewUser {
    NewUser::new("Grace", "Hopper", "grace@x.com")
}

#[tokio::test]
async fn test_insert_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let saved = repo.insert(&ada()).await.expect("Failed to insert user");
    assert_eq!(saved.first_name, "Ada");
    assert_eq!(saved.email, "ada@x.com");

    let found = repo
        .find_by_id(saved.id)
        .await
        .expect("Failed to find user")
        .expect("User not found");

    assert_eq!(found, saved);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let result = repo.find_by_id(UserId(999)).await.expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_inserted_ids_are_distinct_and_increasing() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let first = repo.insert(&ada()).await.expect("Failed to insert user");
    let second = repo.insert(&grace()).await.expect("Failed to insert user");

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_find_all_empty() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let users = repo.find_all().await.expect("Query failed");

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_find_all_ordered_by_id() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let first = repo.insert(&grace()).await.expect("Failed to insert user");
    let second = repo.insert(&ada()).await.expect("Failed to insert user");

    let users = repo.find_all().await.expect("Query failed");

    assert_eq!(users, vec![first, second]);
}

#[tokio::test]
async fn test_update_writes_all_fields() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let mut user = repo.insert(&ada()).await.expect("Failed to insert user");
    user.last_name = "King".to_string();
    user.email = String::new();

    let updated = repo.update(&user).await.expect("Failed to update user");
    assert_eq!(updated, user);

    let found = repo
        .find_by_id(user.id)
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(found.last_name, "King");
    assert_eq!(found.email, "");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let ghost = User::new(UserId(42), "No", "One", "none@x.com");
    let err = repo.update(&ghost).await.expect_err("Update should fail");

    assert!(err.is_not_found());
    assert!(repo.find_all().await.expect("Query failed").is_empty());
}

#[tokio::test]
async fn test_delete_user() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let user = repo.insert(&ada()).await.expect("Failed to insert user");

    assert!(repo.delete(user.id).await.expect("Delete failed"));
    assert!(repo.find_by_id(user.id).await.expect("Query failed").is_none());
    assert!(!repo.delete(user.id).await.expect("Delete failed"));
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.pool());

    let first = repo.insert(&ada()).await.expect("Failed to insert user");
    repo.delete(first.id).await.expect("Delete failed");
    let second = repo.insert(&grace()).await.expect("Failed to insert user");

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_file_database_survives_reconnect() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = DatabaseConfig {
        name: dir.path().join("users.db").to_string_lossy().into_owned(),
        ..DatabaseConfig::default()
    };

    let saved = {
        let db = TestDatabase::with_config(&config).await;
        let repo = SqlUserRepository::new(db.pool());
        let saved = repo.insert(&ada()).await.expect("Failed to insert user");
        db.pool().close().await;
        saved
    };

    let db = TestDatabase::with_config(&config).await;
    let repo = SqlUserRepository::new(db.pool());

    let users = repo.find_all().await.expect("Query failed");
    assert_eq!(users, vec![saved]);
}

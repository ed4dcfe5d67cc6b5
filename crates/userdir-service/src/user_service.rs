//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use userdir_core::{DirectoryResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a user by ID. A missing user is `Ok(None)`, not an error.
    async fn get_user(&self, id: UserId) -> DirectoryResult<Option<UserResponse>>;

    /// Lists all users.
    async fn list_users(&self) -> DirectoryResult<Vec<UserResponse>>;

    /// Creates a new user.
    async fn create_user(&self, request: CreateUserRequest) -> DirectoryResult<UserResponse>;

    /// Overwrites the supplied fields of an existing user.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> DirectoryResult<UserResponse>;

    /// Deletes a user and returns a confirmation message.
    async fn delete_user(&self, id: UserId) -> DirectoryResult<String>;
}

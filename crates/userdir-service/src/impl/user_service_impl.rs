//! User service implementation.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use userdir_core::{DirectoryError, DirectoryResult, NewUser, UserId};
use userdir_repository::UserRepository;

/// User service backed by any [`UserRepository`].
#[derive(Clone)]
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn get_user(&self, id: UserId) -> DirectoryResult<Option<UserResponse>> {
        debug!("Getting user: {}", id);

        let user = self.user_repository.find_by_id(id).await?;
        Ok(user.map(UserResponse::from))
    }

    async fn list_users(&self) -> DirectoryResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn create_user(&self, request: CreateUserRequest) -> DirectoryResult<UserResponse> {
        debug!("Creating user: {}", request.email);

        let saved_user = self.user_repository.insert(&NewUser::from(request)).await?;

        info!("User created: {}", saved_user.id);
        Ok(UserResponse::from(saved_user))
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> DirectoryResult<UserResponse> {
        debug!("Updating user: {}", id);

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found("User", id))?;

        if !user.apply(request.into()) {
            debug!("No changes for user: {}", id);
            return Ok(UserResponse::from(user));
        }

        let updated_user = self.user_repository.update(&user).await?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(updated_user))
    }

    async fn delete_user(&self, id: UserId) -> DirectoryResult<String> {
        debug!("Deleting user: {}", id);

        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found("User", id))?;

        if !self.user_repository.delete(id).await? {
            return Err(DirectoryError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(format!("User with id {id} was deleted."))
    }
}

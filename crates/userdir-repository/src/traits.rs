//! Repository trait definitions.

use async_trait::async_trait;
use userdir_core::{DirectoryResult, NewUser, User, UserId};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<User>>;

    /// Returns every stored user, ordered by id.
    async fn find_all(&self) -> DirectoryResult<Vec<User>>;

    /// Inserts a new user and returns it with its storage-assigned id.
    async fn insert(&self, user: &NewUser) -> DirectoryResult<User>;

    /// Writes all fields of an existing user.
    ///
    /// Fails with `NotFound` if the row no longer exists.
    async fn update(&self, user: &User) -> DirectoryResult<User>;

    /// Deletes a user by ID. Returns false if no row matched.
    async fn delete(&self, id: UserId) -> DirectoryResult<bool>;
}

//! User repository over the sqlx `Any` driver.

use super::UserStatements;
use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use userdir_core::{DirectoryError, DirectoryResult, NewUser, User, UserId};

/// SQL user repository for MySQL, PostgreSQL and SQLite.
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    pool: Arc<DatabasePool>,
    statements: &'static UserStatements,
}

impl SqlUserRepository {
    /// Creates a repository speaking the pool's dialect.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        let statements = UserStatements::for_dialect(pool.dialect());
        Self { pool, statements }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl TryFrom<UserRow> for User {
    type Error = DirectoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::try_from(row.id)
            .map_err(|e| DirectoryError::Validation(format!("user id {} out of range: {e}", row.id)))?;

        Ok(User {
            id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        })
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(self.statements.select_by_id)
            .bind(i64::from(id))
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> DirectoryResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(self.statements.select_all)
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn insert(&self, user: &NewUser) -> DirectoryResult<User> {
        debug!("Inserting user: {}", user.email);

        let raw_id = if self.statements.insert_returns_id {
            sqlx::query_scalar::<_, i64>(self.statements.insert)
                .bind(user.first_name.as_str())
                .bind(user.last_name.as_str())
                .bind(user.email.as_str())
                .fetch_one(self.pool.inner())
                .await?
        } else {
            sqlx::query(self.statements.insert)
                .bind(user.first_name.as_str())
                .bind(user.last_name.as_str())
                .bind(user.email.as_str())
                .execute(self.pool.inner())
                .await?
                .last_insert_id()
                .ok_or_else(|| DirectoryError::internal("Database did not report the inserted id"))?
        };

        let id = UserId::try_from(raw_id)
            .map_err(|e| DirectoryError::Validation(format!("user id {raw_id} out of range: {e}")))?;

        Ok(user.clone().into_user(id))
    }

    async fn update(&self, user: &User) -> DirectoryResult<User> {
        debug!("Updating user: {}", user.id);

        sqlx::query(self.statements.update)
            .bind(user.first_name.as_str())
            .bind(user.last_name.as_str())
            .bind(user.email.as_str())
            .bind(i64::from(user.id))
            .execute(self.pool.inner())
            .await?;

        // MySQL reports zero affected rows for a no-op write, so read back instead.
        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| DirectoryError::not_found("User", user.id))
    }

    async fn delete(&self, id: UserId) -> DirectoryResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query(self.statements.delete)
            .bind(i64::from(id))
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

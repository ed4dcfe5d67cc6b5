//! Query resolvers.

use super::user_service;
use crate::{error::field_error, types::UserObject};
use async_graphql::{Context, Object, Result};
use userdir_core::UserId;

/// Root query type.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Fetches one user. Null when no user has this id.
    async fn get_user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<UserObject>> {
        let user = user_service(ctx)?
            .get_user(UserId::new(id))
            .await
            .map_err(field_error)?;

        Ok(user.map(UserObject::from))
    }

    /// Lists every stored user.
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<UserObject>>>> {
        let users = user_service(ctx)?.list_users().await.map_err(field_error)?;

        Ok(Some(users.into_iter().map(|user| Some(user.into())).collect()))
    }
}

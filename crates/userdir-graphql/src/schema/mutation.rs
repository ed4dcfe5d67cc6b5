//! Mutation resolvers.

use super::user_service;
use crate::{error::field_error, types::UserObject};
use async_graphql::{Context, MaybeUndefined, Object, Result};
use userdir_core::UserId;
use userdir_service::{CreateUserRequest, UpdateUserRequest};

/// Root mutation type.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Stores a new user and returns it with its assigned id.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: String,
        email: String,
    ) -> Result<Option<UserObject>> {
        let request = CreateUserRequest {
            first_name,
            last_name,
            email,
        };

        let user = user_service(ctx)?
            .create_user(request)
            .await
            .map_err(field_error)?;

        Ok(Some(user.into()))
    }

    /// Overwrites the supplied fields of a user. Omitted or null fields keep
    /// their stored value.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: i32,
        first_name: MaybeUndefined<String>,
        last_name: MaybeUndefined<String>,
        email: MaybeUndefined<String>,
    ) -> Result<Option<UserObject>> {
        let request = UpdateUserRequest {
            first_name: supplied(first_name),
            last_name: supplied(last_name),
            email: supplied(email),
        };

        let user = user_service(ctx)?
            .update_user(UserId::new(id), request)
            .await
            .map_err(field_error)?;

        Ok(Some(user.into()))
    }

    /// Removes a user and returns a confirmation message.
    async fn delete_user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<String>> {
        let message = user_service(ctx)?
            .delete_user(UserId::new(id))
            .await
            .map_err(field_error)?;

        Ok(Some(message))
    }
}

// The columns are NOT NULL, so an explicit null cannot be stored.
fn supplied(value: MaybeUndefined<String>) -> Option<String> {
    match value {
        MaybeUndefined::Value(value) => Some(value),
        MaybeUndefined::Null | MaybeUndefined::Undefined => None,
    }
}

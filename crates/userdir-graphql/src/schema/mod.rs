//! GraphQL schema for the user directory.

mod mutation;
mod query;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use async_graphql::{Context, EmptySubscription, Schema};
use std::sync::Arc;
use userdir_service::UserService;

/// The executable user schema.
pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the service every resolver calls into.
pub fn build_schema(user_service: Arc<dyn UserService>) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(user_service)
        .finish()
}

fn user_service<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn UserService>> {
    ctx.data::<Arc<dyn UserService>>()
}

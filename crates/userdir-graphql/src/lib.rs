//! # Userdir GraphQL
//!
//! GraphQL API layer using async-graphql on Axum.
//! Serves the user schema, the GraphiQL explorer, and a health check.

pub mod controllers;
pub mod error;
pub mod middleware;
pub mod router;
pub mod schema;
pub mod state;
pub mod types;

pub use router::*;
pub use schema::{build_schema, MutationRoot, QueryRoot, UserSchema};
pub use state::*;

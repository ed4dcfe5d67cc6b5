//! HTTP controllers.

pub mod graphql_controller;
pub mod health_controller;

pub use health_controller::*;

//! # Userdir Service
//!
//! Business logic for the user directory: the [`UserService`] use cases
//! and the request/response DTOs the API layer speaks.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;

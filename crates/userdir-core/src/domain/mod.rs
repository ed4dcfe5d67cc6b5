//! # Directory Domain
//!
//! The single entity served by the directory, plus the value types used to
//! create and partially update it.

pub mod user;

pub use user::*;

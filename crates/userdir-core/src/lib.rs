//! # Userdir Core
//!
//! Core types, traits, and error definitions for the user directory service.
//! Every other crate in the workspace builds on the entity, id, and error
//! types defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;

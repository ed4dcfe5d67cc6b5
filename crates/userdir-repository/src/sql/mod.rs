//! SQL implementations shared by every supported dialect.

mod statements;
mod user_repository;

pub(crate) use statements::UserStatements;
pub use user_repository::SqlUserRepository;

//! # Userdir Repository
//!
//! SQL persistence for users. One [`SqlUserRepository`] serves MySQL,
//! PostgreSQL and SQLite through the sqlx `Any` driver; the dialect is
//! picked at runtime from configuration.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>
//! SqlUserRepository
//!   ↓  Arc<DatabasePool>
//! MySQL | PostgreSQL | SQLite
//! ```

pub mod pool;
pub mod sql;
pub mod traits;

pub use pool::*;
pub use sql::SqlUserRepository;
pub use traits::*;

//! Result type aliases for the user directory.

use crate::DirectoryError;

/// A specialized `Result` type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

//! Unified error type for all layers of the directory.

use thiserror::Error;

/// Unified error type for the user directory.
///
/// Resolvers never handle these locally: every variant travels up to the
/// transport layer and is reported to the caller as-is.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// No row exists for the requested key.
    #[error("{resource_type} not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Input rejected before reaching storage.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any failure reported by the storage engine, passed through verbatim.
    #[error("{0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Returns the HTTP status code closest to this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for the storage-miss variant.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

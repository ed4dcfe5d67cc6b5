//! Mapping of directory errors onto GraphQL field errors.

use async_graphql::ErrorExtensions;
use tracing::error;
use userdir_core::DirectoryError;

/// Converts a service error into a GraphQL error.
///
/// The message is the error's display text; `extensions.code` carries
/// [`DirectoryError::error_code`].
pub fn field_error(err: DirectoryError) -> async_graphql::Error {
    if err.status_code() >= 500 {
        error!(code = err.error_code(), "Resolver failed: {}", err);
    }

    let code = err.error_code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    #[test]
    fn test_not_found_keeps_message_and_code() {
        let err = field_error(DirectoryError::not_found("User", 3));

        assert_eq!(err.message, "User not found");
        let code = err.extensions.as_ref().and_then(|ext| ext.get("code"));
        assert_eq!(code, Some(&Value::from("NOT_FOUND")));
    }

    #[test]
    fn test_database_error_text_unchanged() {
        let err = field_error(DirectoryError::Database("disk I/O error".to_string()));

        assert_eq!(err.message, "disk I/O error");
        let code = err.extensions.as_ref().and_then(|ext| ext.get("code"));
        assert_eq!(code, Some(&Value::from("DATABASE_ERROR")));
    }
}

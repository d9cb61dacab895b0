use serde::Serialize;
use thiserror::Error;

/// Error taxonomy for the catalog core.
///
/// Three kinds, not transport codes: validation failures are always
/// recoverable and carry the reason produced by the factory that rejected
/// the input; not-found covers missing aggregates and missing nested
/// entities; storage errors come out of the repository boundary and are not
/// retried inside the core.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        AppError::StorageError(message.into())
    }
}

// Driver faults surface at the repository boundary only.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StorageError(format!("document codec error: {}", err))
    }
}

/// Result type alias used across the crate.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_the_reason() {
        let err = AppError::validation("latitude must range [-90, 90]");
        assert_eq!(
            err.to_string(),
            "Validation error: latitude must range [-90, 90]"
        );

        let err = AppError::not_found("school 'abc' does not exist");
        assert_eq!(err.to_string(), "Not found: school 'abc' does not exist");
    }

    #[test]
    fn test_serde_json_errors_become_storage_errors() {
        let bad = serde_json::from_str::<serde_json::Value>("{");
        let err: AppError = bad.unwrap_err().into();
        assert!(matches!(err, AppError::StorageError(_)));
    }
}

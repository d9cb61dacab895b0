use std::fmt;

use serde::Serialize;

use crate::shared::errors::{AppError, AppResult};

/// String wrapper whose trimmed length is always greater than zero.
///
/// Only the validating factory can build one, so any `NonEmptyString` in the
/// model is known-good. The original (untrimmed) value is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    pub fn create(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::validation("string cannot be empty"));
        }
        Ok(NonEmptyString(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

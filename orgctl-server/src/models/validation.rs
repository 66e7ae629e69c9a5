//! Validation error types

use std::fmt;

/// Validation error for inbound schemas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty (or only whitespace) when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length in characters
    TooLong { field: &'static str, max: usize },

    /// Field contains a NUL character, which text columns cannot store
    ContainsNul { field: &'static str },

    /// Request body could not be parsed into the expected shape
    Malformed { reason: String },

    /// Path parameters could not be extracted
    InvalidPath { reason: String },

    /// Path segment is not a valid record id
    InvalidId { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::ContainsNul { field } => write!(f, "{} cannot contain NUL characters", field),
            Self::Malformed { reason } => write!(f, "malformed request body: {}", reason),
            Self::InvalidPath { reason } => write!(f, "invalid path: {}", reason),
            Self::InvalidId { value } => write!(f, "invalid id '{}': expected an integer", value),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a required text field and return it as an owned string.
///
/// Length is counted in characters, matching `VARCHAR(n)` semantics.
pub fn bounded_text(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.contains('\0') {
        return Err(ValidationError::ContainsNul { field });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value.to_owned())
}

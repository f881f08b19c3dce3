//! Common error types used across the workspace.
//!
//! Each layer converts into [`SalonError`] through `#[from]`; there are no
//! `String`-only variants at the top level.

/// Top-level error for every salon operation.
#[derive(Debug, thiserror::Error)]
pub enum SalonError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A submission that breaks a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("duration {value:?} is not a whole number of minutes")]
    InvalidDuration { value: String },

    #[error("cost {value:?} is not a valid amount")]
    InvalidCost { value: String },

    #[error("no date selected in the calendar")]
    NoDateSelected,

    #[error("{value:?} is not a valid identifier")]
    InvalidId { value: String },

    #[error("{value:?} is not a valid date")]
    InvalidDate { value: String },
}

/// Lookup of a record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} does not exist")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Failure inside a storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StorageError {
    pub message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_validation_error_when_converted() {
        let err: SalonError = ValidationError::NoDateSelected.into();
        assert!(matches!(
            err,
            SalonError::Validation(ValidationError::NoDateSelected)
        ));
    }

    #[test]
    fn should_name_missing_field_in_message() {
        let err = ValidationError::MissingField {
            field: "client name",
        };
        assert_eq!(err.to_string(), "client name is required");
    }

    #[test]
    fn should_describe_not_found_error() {
        let err = NotFoundError {
            entity: "Service",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Service abc does not exist");
    }
}

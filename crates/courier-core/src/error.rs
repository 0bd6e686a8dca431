//! Error types for Courier.

use thiserror::Error;

/// Main error type for Courier operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CourierError {
    /// Caller-supplied input cannot be planned.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Resource not found.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound { resource_type: String, id: String },
}

impl CourierError {
    /// Shorthand for a [`CourierError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CourierError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Shorthand for a [`CourierError::NotFound`].
    pub fn not_found(resource_type: impl Into<String>, id: impl ToString) -> Self {
        CourierError::NotFound {
            resource_type: resource_type.into(),
            id: id.to_string(),
        }
    }
}

/// Convenience Result type for Courier operations.
pub type Result<T> = std::result::Result<T, CourierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CourierError::invalid_argument("2 locations but 3 priorities");
        assert_eq!(
            err.to_string(),
            "Invalid argument: 2 locations but 3 priorities"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = CourierError::not_found("route", 42);
        assert_eq!(err.to_string(), "Resource not found: route with id 42");
    }
}

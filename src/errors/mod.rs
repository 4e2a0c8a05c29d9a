//! # Error Handling
//!
//! Error types for the Spendlog service using `thiserror`. The API layer maps
//! these onto HTTP responses in [`crate::api::error`].

use std::fmt;

/// Custom result type for Spendlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Spendlog service
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String> },

    /// Resource conflict errors (e.g. username already taken)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Authentication and authorization errors
    #[error("{message}")]
    Auth { message: String, error_type: AuthErrorType },

    /// Resource not found errors
    #[error("{resource_type} not found: {id}")]
    NotFound { resource_type: String, id: String },

    /// Database and storage errors
    #[error("Database error: {context}")]
    Database {
        #[source]
        source: sqlx::Error,
        context: String,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Authentication error subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorType {
    InvalidCredentials,
    MissingToken,
    InvalidToken,
    ExpiredToken,
}

impl fmt::Display for AuthErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuthErrorType::InvalidCredentials => "invalid_credentials",
            AuthErrorType::MissingToken => "missing_token",
            AuthErrorType::InvalidToken => "invalid_token",
            AuthErrorType::ExpiredToken => "expired_token",
        };
        write!(f, "{}", label)
    }
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into(), field: None }
    }

    /// Create a validation error attached to a specific field
    pub fn validation_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Validation { message: message.into(), field: Some(field.into()) }
    }

    /// Create a new conflict error
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict { message: message.into() }
    }

    /// Create a new authentication error
    pub fn auth<S: Into<String>>(message: S, error_type: AuthErrorType) -> Self {
        Self::Auth { message: message.into(), error_type }
    }

    /// Create a new not-found error
    pub fn not_found<R: Into<String>, I: Into<String>>(resource_type: R, id: I) -> Self {
        Self::NotFound { resource_type: resource_type.into(), id: id.into() }
    }

    /// Create a database error with context
    pub fn database<S: Into<String>>(source: sqlx::Error, context: S) -> Self {
        Self::Database { source, context: context.into() }
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect::<Vec<_>>()
                    .join(", ");
                if detail.is_empty() {
                    format!("{} is invalid", field)
                } else {
                    detail
                }
            })
            .collect::<Vec<_>>()
            .join("; ");
        Error::validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = Error::validation("amount must be positive");
        assert_eq!(err.to_string(), "Validation error: amount must be positive");
    }

    #[test]
    fn auth_error_carries_type() {
        let err = Error::auth("Invalid credentials.", AuthErrorType::InvalidCredentials);
        match err {
            Error::Auth { error_type, .. } => {
                assert_eq!(error_type, AuthErrorType::InvalidCredentials)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn not_found_display_names_resource() {
        let err = Error::not_found("expense", "abc");
        assert_eq!(err.to_string(), "expense not found: abc");
    }
}

//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)          - Business rule violations
//! ├── Repository(RepositoryError)  - Fixture store failures
//! ├── Configuration(String)        - Settings rejected at load time
//! ├── Validation(String)           - Input validation failures
//! ├── NotFound { .. }              - Resource not found
//! └── NoQuoteAvailable(String)     - A payout could not be priced
//! ```
//!
//! # Examples
//!
//! ```
//! use agent_arena::application::error::ApplicationError;
//!
//! let err = ApplicationError::not_found("Agent", "9");
//! assert_eq!(err.to_string(), "not found: Agent with id 9");
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Repository error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Configuration could not be loaded or was rejected.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// The stake cannot be priced at the current quote.
    #[error("no quote available: {0}")]
    NoQuoteAvailable(String),
}

impl ApplicationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Creates a no quote error.
    #[must_use]
    pub fn no_quote(message: impl Into<String>) -> Self {
        Self::NoQuoteAvailable(message.into())
    }

    /// Returns true if the error is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Repository(RepositoryError::NotFound { .. })
        )
    }

    /// Returns true if the error means no quote could be shown.
    #[must_use]
    pub fn is_no_quote(&self) -> bool {
        match self {
            Self::NoQuoteAvailable(_) => true,
            Self::Domain(err) => err.is_no_quote(),
            _ => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ArithmeticError;

    #[test]
    fn division_by_zero_is_no_quote() {
        let err: ApplicationError = DomainError::from(ArithmeticError::DivisionByZero).into();
        assert!(err.is_no_quote());
        assert!(!ApplicationError::validation("x").is_no_quote());
    }

    #[test]
    fn repository_not_found_is_not_found() {
        let err: ApplicationError = RepositoryError::not_found("Agent", "7").into();
        assert!(err.is_not_found());
    }
}

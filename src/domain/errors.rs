//! # Domain Errors
//!
//! Error types for business rule violations in the domain layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! DomainError
//! ├── Arithmetic(ArithmeticError) - Checked arithmetic failures
//! ├── InvalidPrice(String)        - Price outside [0, 100] cents
//! ├── InvalidStake(String)        - Negative or malformed stake
//! ├── UnknownAgent(String)        - Agent id not in the arena
//! ├── InvalidConfig(String)       - Quote model parameters rejected
//! └── ValidationError(String)     - Any other invariant violation
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Price is outside the valid cent range.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Stake is negative or malformed.
    #[error("invalid stake: {0}")]
    InvalidStake(String),

    /// The agent is not part of the arena.
    #[error("unknown agent: {0}")]
    UnknownAgent(String),

    /// Quote model configuration rejected.
    #[error("invalid quote model config: {0}")]
    InvalidConfig(String),

    /// Generic invariant violation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Returns true if this error means no quote can be shown.
    ///
    /// The UI treats a division by zero during payout computation as
    /// "no quote available" rather than rendering a number.
    #[must_use]
    pub fn is_no_quote(&self) -> bool {
        matches!(self, Self::Arithmetic(ArithmeticError::DivisionByZero))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_errors_convert() {
        let err: DomainError = ArithmeticError::DivisionByZero.into();
        assert!(err.is_no_quote());
        assert_eq!(err.to_string(), "arithmetic error: division by zero");
    }

    #[test]
    fn other_errors_are_not_no_quote() {
        assert!(!DomainError::InvalidStake("negative".to_string()).is_no_quote());
        assert!(!DomainError::Arithmetic(ArithmeticError::Overflow).is_no_quote());
    }
}

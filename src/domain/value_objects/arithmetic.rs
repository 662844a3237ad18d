//! # Checked Arithmetic
//!
//! Traits and utilities for safe arithmetic operations.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`clamp`] - Inclusive clamp for decimal values
//!
//! # Examples
//!
//! ```
//! use agent_arena::domain::value_objects::arithmetic::{CheckedArithmetic, ArithmeticError};
//! use rust_decimal::Decimal;
//!
//! let stake = Decimal::new(100, 0);
//! assert_eq!(stake.safe_div(Decimal::ZERO), Err(ArithmeticError::DivisionByZero));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for arithmetic operations.
///
/// Represents failures that can occur during checked arithmetic,
/// including overflow, underflow, division by zero, and invalid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid value provided (e.g., negative stake).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Clamps `value` to the inclusive range `[lo, hi]`.
///
/// Unlike [`Ord::clamp`] this never panics: if `lo > hi` the bounds are
/// swapped.
///
/// # Examples
///
/// ```
/// use agent_arena::domain::value_objects::arithmetic::clamp;
/// use rust_decimal::Decimal;
///
/// let lo = Decimal::new(10, 0);
/// let hi = Decimal::new(90, 0);
/// assert_eq!(clamp(Decimal::new(95, 0), lo, hi), hi);
/// assert_eq!(clamp(Decimal::new(42, 0), lo, hi), Decimal::new(42, 0));
/// ```
#[inline]
#[must_use]
pub fn clamp(value: Decimal, lo: Decimal, hi: Decimal) -> Decimal {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    value.max(lo).min(hi)
}

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow, underflow, or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

impl CheckedArithmetic for u64 {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_div(rhs).ok_or(ArithmeticError::DivisionByZero)
    }
}

/// Sums decimals with overflow checking.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the running total overflows.
pub fn checked_sum<I>(values: I) -> ArithmeticResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.safe_add(v))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod arithmetic_error {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
            assert_eq!(
                ArithmeticError::DivisionByZero.to_string(),
                "division by zero"
            );
            assert_eq!(
                ArithmeticError::InvalidValue("negative stake").to_string(),
                "invalid value: negative stake"
            );
        }
    }

    mod clamp_tests {
        use super::*;

        #[test]
        fn clamps_above_and_below() {
            let lo = Decimal::new(10, 0);
            let hi = Decimal::new(90, 0);
            assert_eq!(clamp(Decimal::new(-5, 0), lo, hi), lo);
            assert_eq!(clamp(Decimal::new(500, 0), lo, hi), hi);
        }

        #[test]
        fn bounds_are_inclusive() {
            let lo = Decimal::new(10, 0);
            let hi = Decimal::new(90, 0);
            assert_eq!(clamp(lo, lo, hi), lo);
            assert_eq!(clamp(hi, lo, hi), hi);
        }

        #[test]
        fn swapped_bounds_do_not_panic() {
            let value = clamp(Decimal::new(50, 0), Decimal::new(90, 0), Decimal::new(10, 0));
            assert_eq!(value, Decimal::new(50, 0));
        }
    }

    mod checked_arithmetic_decimal {
        use super::*;

        #[test]
        fn safe_div_works() {
            let a = Decimal::new(100, 0);
            let b = Decimal::new(5, 1);
            assert_eq!(a.safe_div(b).unwrap(), Decimal::new(200, 0));
        }

        #[test]
        fn safe_div_by_zero_fails() {
            assert_eq!(
                Decimal::ONE.safe_div(Decimal::ZERO),
                Err(ArithmeticError::DivisionByZero)
            );
        }

        #[test]
        fn safe_mul_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_mul(Decimal::TWO),
                Err(ArithmeticError::Overflow)
            );
        }
    }

    mod checked_arithmetic_u64 {
        use super::*;

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(u64::MAX.safe_add(1), Err(ArithmeticError::Overflow));
        }

        #[test]
        fn safe_sub_underflow_fails() {
            assert_eq!(0u64.safe_sub(1), Err(ArithmeticError::Underflow));
        }
    }

    #[test]
    fn checked_sum_adds_all_values() {
        let total = checked_sum([Decimal::new(1050, 2), Decimal::new(-1400, 2)]).unwrap();
        assert_eq!(total, Decimal::new(-350, 2));
    }

    #[test]
    fn checked_sum_of_nothing_is_zero() {
        assert_eq!(checked_sum(Vec::new()).unwrap(), Decimal::ZERO);
    }
}

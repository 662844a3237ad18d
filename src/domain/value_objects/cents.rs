//! # Cents Value Object
//!
//! Price of one Yes or No share, in cents of a dollar.
//!
//! A share pays one dollar if its side resolves, so a price always lies in
//! `[0, 100]` and can be read as a probability.
//!
//! # Examples
//!
//! ```
//! use agent_arena::domain::value_objects::Cents;
//! use rust_decimal::Decimal;
//!
//! let yes = Cents::new(Decimal::new(785, 1)).unwrap();
//! assert_eq!(yes.to_string(), "79¢");
//! assert_eq!(yes.precise(), "78.5¢");
//! assert_eq!(yes.complement().get(), Decimal::new(215, 1));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A share price in cents, within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Cents(Decimal);

impl Cents {
    /// Creates a price, rejecting values outside `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is out of range.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidPrice(format!(
                "{value} cents is negative"
            )));
        }
        if value > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidPrice(format!(
                "{value} cents exceeds 100"
            )));
        }
        Ok(Self(value))
    }

    /// Wraps a value already known to be within `[0, 100]`.
    ///
    /// Only for callers that clamp before constructing.
    #[must_use]
    pub(crate) const fn from_clamped(value: Decimal) -> Self {
        Self(value)
    }

    /// Zero cents.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// A full dollar.
    #[must_use]
    pub const fn par() -> Self {
        Self(Decimal::ONE_HUNDRED)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Price of the opposite side: `100 - self`.
    #[must_use]
    pub fn complement(&self) -> Self {
        Self(Decimal::ONE_HUNDRED - self.0)
    }

    /// The price as a fraction of a dollar.
    #[must_use]
    pub fn as_dollars(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Rounded to whole cents, half away from zero.
    #[must_use]
    pub fn whole(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// One-decimal rendering used for average prices, e.g. `65.2¢`.
    #[must_use]
    pub fn precise(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.1}¢")
    }
}

/// Whole-cent label. Rounding each side on its own means a 78.5/21.5 pair
/// renders as `79¢`/`22¢`, which sum to 101.
impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}¢", self.whole().normalize())
    }
}

impl TryFrom<Decimal> for Cents {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cents> for Decimal {
    fn from(value: Cents) -> Self {
        value.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_out_of_range() {
        assert!(Cents::new(dec!(-0.1)).is_err());
        assert!(Cents::new(dec!(100.01)).is_err());
        assert!(Cents::new(dec!(0)).is_ok());
        assert!(Cents::new(dec!(100)).is_ok());
    }

    #[test]
    fn display_rounds_half_away_from_zero() {
        assert_eq!(Cents::new(dec!(78.5)).unwrap().to_string(), "79¢");
        assert_eq!(Cents::new(dec!(21.5)).unwrap().to_string(), "22¢");
        assert_eq!(Cents::new(dec!(50)).unwrap().to_string(), "50¢");
    }

    #[test]
    fn half_cent_pair_labels_sum_to_101() {
        let yes = Cents::new(dec!(78.5)).unwrap();
        let no = yes.complement();
        assert_eq!(yes.get() + no.get(), dec!(100));
        assert_eq!(yes.whole() + no.whole(), dec!(101));
    }

    #[test]
    fn precise_keeps_one_decimal() {
        assert_eq!(Cents::new(dec!(65)).unwrap().precise(), "65.0¢");
        assert_eq!(Cents::new(dec!(65.25)).unwrap().precise(), "65.3¢");
    }

    #[test]
    fn complement_sums_to_par() {
        let yes = Cents::new(dec!(64.6)).unwrap();
        assert_eq!(yes.get() + yes.complement().get(), dec!(100));
    }

    #[test]
    fn as_dollars_divides_by_hundred() {
        assert_eq!(Cents::new(dec!(50)).unwrap().as_dollars(), dec!(0.5));
    }

    #[test]
    fn serde_validates_range() {
        let ok: Cents = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(ok.get(), dec!(42));
        assert!(serde_json::from_str::<Cents>("\"142\"").is_err());
    }
}

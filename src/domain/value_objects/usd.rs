//! # USD Value Object
//!
//! Dollar amounts and their display forms.
//!
//! # Examples
//!
//! ```
//! use agent_arena::domain::value_objects::Usd;
//! use rust_decimal::Decimal;
//!
//! let pnl = Usd::new(Decimal::new(285075, 2));
//! assert_eq!(pnl.to_string(), "$2,850.75");
//! assert_eq!(pnl.signed(), "+$2,850.75");
//! assert_eq!(Usd::new(Decimal::new(28543050, 2)).compact_thousands(), "$285.4K");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(Decimal);

impl Usd {
    /// Wraps a decimal dollar amount.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Zero dollars.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true for zero or positive amounts.
    #[inline]
    #[must_use]
    pub fn is_gain(&self) -> bool {
        !self.0.is_sign_negative() || self.0.is_zero()
    }

    /// Formats with thousands separators and `dp` decimal places.
    #[must_use]
    pub fn grouped(&self, dp: u32) -> String {
        let sign = if self.is_gain() { "" } else { "-" };
        format!("{sign}${}", group_thousands(self.0.abs(), dp))
    }

    /// Two-decimal form with an explicit sign: `+$10.50`, `-$14.00`.
    #[must_use]
    pub fn signed(&self) -> String {
        if self.is_gain() {
            format!("+{}", self.grouped(2))
        } else {
            self.grouped(2)
        }
    }

    /// Thousands with one decimal: `$285.4K`.
    #[must_use]
    pub fn compact_thousands(&self) -> String {
        let thousands = self.0 / Decimal::ONE_THOUSAND;
        format!("${}K", fixed(thousands, 1))
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped(2))
    }
}

impl From<Decimal> for Usd {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

/// Rounds half away from zero and renders exactly `dp` decimals.
///
/// # Examples
///
/// ```
/// use agent_arena::domain::value_objects::usd::fixed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fixed(Decimal::new(2845, 3), 2), "2.85");
/// assert_eq!(fixed(Decimal::new(5, 0), 2), "5.00");
/// ```
#[must_use]
pub fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = dp as usize)
}

/// Renders a non-negative amount with comma thousands separators.
///
/// # Examples
///
/// ```
/// use agent_arena::domain::value_objects::usd::group_thousands;
/// use rust_decimal::Decimal;
///
/// assert_eq!(group_thousands(Decimal::new(100000, 0), 0), "100,000");
/// assert_eq!(group_thousands(Decimal::new(99950, 2), 2), "999.50");
/// ```
#[must_use]
pub fn group_thousands(value: Decimal, dp: u32) -> String {
    let rendered = fixed(value.abs(), dp);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (rendered, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

//! # Quote Model
//!
//! Derives the Yes/No price pair for an agent from its simulated P&L, and
//! the potential payout of a stake at a given side price.
//!
//! # Pricing
//!
//! ```text
//! yes = clamp(midpoint + pnl_percent * sensitivity, floor, ceiling)
//! no  = 100 - yes
//! ```
//!
//! With the default parameters (`50`, `10`, `10`, `90`) an agent at `+2.85%`
//! is quoted Yes `78.5¢` / No `21.5¢`. The clamp is symmetric around 50, so
//! both sides always stay within `[floor, ceiling]` and sum to 100.
//!
//! # Payouts
//!
//! ```text
//! to win  = stake / (price / 100) - stake
//! receive = stake * (price / 100)
//! ```
//!
//! A zero stake pays zero at any price. A zero price on the "to win" path is
//! a [`ArithmeticError::DivisionByZero`], which callers surface as "no quote
//! available".
//!
//! # Examples
//!
//! ```
//! use agent_arena::domain::services::quote_model::{yes_price, no_price, potential_payout};
//! use agent_arena::domain::value_objects::PayoutFraming;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(yes_price(Decimal::ZERO).get(), Decimal::new(50, 0));
//! assert_eq!(no_price(Decimal::new(4, 0)).get(), Decimal::new(10, 0));
//!
//! let win = potential_payout(Decimal::new(100, 0), Decimal::new(50, 0), PayoutFraming::ToWin).unwrap();
//! assert_eq!(win, Decimal::new(100, 0));
//! ```

use crate::domain::entities::agent::Agent;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{
    ArithmeticError, ArithmeticResult, CheckedArithmetic, clamp,
};
use crate::domain::value_objects::{AgentId, Cents, Outcome, PayoutFraming};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of the pricing formula.
///
/// # Invariants
///
/// - `sensitivity > 0`
/// - `0 < floor < ceiling <= 100`
/// - `floor + ceiling == 100`
///
/// # Examples
///
/// ```
/// use agent_arena::domain::services::quote_model::QuoteModelConfig;
/// use rust_decimal::Decimal;
///
/// let config = QuoteModelConfig::default()
///     .with_bounds(Decimal::new(5, 0), Decimal::new(95, 0));
/// assert!(config.validate().is_ok());
///
/// let lopsided = QuoteModelConfig::default()
///     .with_bounds(Decimal::new(20, 0), Decimal::new(90, 0));
/// assert!(lopsided.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteModelConfig {
    /// Yes price for an agent at exactly 0% P&L.
    midpoint: Decimal,
    /// Cents of Yes price per percentage point of P&L.
    sensitivity: Decimal,
    /// Lowest quotable price.
    floor: Decimal,
    /// Highest quotable price.
    ceiling: Decimal,
}

impl QuoteModelConfig {
    /// Creates a configuration from explicit parameters.
    #[must_use]
    pub const fn new(midpoint: Decimal, sensitivity: Decimal, floor: Decimal, ceiling: Decimal) -> Self {
        Self {
            midpoint,
            sensitivity,
            floor,
            ceiling,
        }
    }

    /// Sets the midpoint.
    #[must_use]
    pub fn with_midpoint(mut self, midpoint: Decimal) -> Self {
        self.midpoint = midpoint;
        self
    }

    /// Sets the sensitivity.
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: Decimal) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Sets the clamp bounds.
    #[must_use]
    pub fn with_bounds(mut self, floor: Decimal, ceiling: Decimal) -> Self {
        self.floor = floor;
        self.ceiling = ceiling;
        self
    }

    /// Returns the midpoint.
    #[inline]
    #[must_use]
    pub const fn midpoint(&self) -> Decimal {
        self.midpoint
    }

    /// Returns the sensitivity.
    #[inline]
    #[must_use]
    pub const fn sensitivity(&self) -> Decimal {
        self.sensitivity
    }

    /// Returns the floor.
    #[inline]
    #[must_use]
    pub const fn floor(&self) -> Decimal {
        self.floor
    }

    /// Returns the ceiling.
    #[inline]
    #[must_use]
    pub const fn ceiling(&self) -> Decimal {
        self.ceiling
    }

    /// Checks the invariants listed on the type.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfig` naming the first violated rule.
    pub fn validate(&self) -> DomainResult<()> {
        if self.sensitivity <= Decimal::ZERO {
            return Err(DomainError::InvalidConfig(
                "sensitivity must be positive".to_string(),
            ));
        }
        if self.floor <= Decimal::ZERO || self.ceiling > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidConfig(
                "bounds must lie within (0, 100]".to_string(),
            ));
        }
        if self.floor >= self.ceiling {
            return Err(DomainError::InvalidConfig(format!(
                "floor {} must be below ceiling {}",
                self.floor, self.ceiling
            )));
        }
        if self.floor + self.ceiling != Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidConfig(format!(
                "floor {} and ceiling {} must sum to 100",
                self.floor, self.ceiling
            )));
        }
        Ok(())
    }
}

impl Default for QuoteModelConfig {
    fn default() -> Self {
        Self {
            midpoint: Decimal::new(50, 0),
            sensitivity: Decimal::TEN,
            floor: Decimal::TEN,
            ceiling: Decimal::new(90, 0),
        }
    }
}

/// The Yes/No price pair for one agent.
///
/// # Invariants
///
/// - `yes + no == 100`
/// - both sides within the model's `[floor, ceiling]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    agent_id: AgentId,
    yes: Cents,
    no: Cents,
}

impl Quote {
    /// Returns the quoted agent.
    #[inline]
    #[must_use]
    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Returns the Yes price.
    #[inline]
    #[must_use]
    pub const fn yes(&self) -> Cents {
        self.yes
    }

    /// Returns the No price.
    #[inline]
    #[must_use]
    pub const fn no(&self) -> Cents {
        self.no
    }

    /// Returns the price of the given side.
    #[must_use]
    pub const fn price_for(&self, outcome: Outcome) -> Cents {
        match outcome {
            Outcome::Yes => self.yes,
            Outcome::No => self.no,
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote({}: Yes {} / No {})",
            self.agent_id, self.yes, self.no
        )
    }
}

/// Stateless pricing model.
///
/// Holds only its validated parameters; every call is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuoteModel {
    config: QuoteModelConfig,
}

impl QuoteModel {
    /// Creates a model after validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfig` if the parameters break an
    /// invariant of [`QuoteModelConfig`].
    pub fn new(config: QuoteModelConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the parameters.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &QuoteModelConfig {
        &self.config
    }

    /// Yes price for a P&L percentage.
    ///
    /// Total: when the intermediate product overflows the decimal range the
    /// result saturates to the bound on the input's side.
    #[must_use]
    pub fn yes_price(&self, pnl_percent: Decimal) -> Cents {
        let QuoteModelConfig {
            midpoint,
            sensitivity,
            floor,
            ceiling,
        } = self.config;

        let base = pnl_percent
            .checked_mul(sensitivity)
            .and_then(|delta| delta.checked_add(midpoint));

        let price = match base {
            Some(base) => clamp(base, floor, ceiling),
            None if pnl_percent.is_sign_negative() => floor,
            None => ceiling,
        };
        Cents::from_clamped(price)
    }

    /// No price for a P&L percentage: `100 - yes_price`.
    #[must_use]
    pub fn no_price(&self, pnl_percent: Decimal) -> Cents {
        self.yes_price(pnl_percent).complement()
    }

    /// Quotes both sides for an agent.
    #[must_use]
    pub fn quote(&self, agent: &Agent) -> Quote {
        let yes = self.yes_price(agent.pnl_percent());
        Quote {
            agent_id: agent.id().clone(),
            yes,
            no: yes.complement(),
        }
    }

    /// Potential payout of a stake at a side price.
    ///
    /// # Errors
    ///
    /// See [`potential_payout`].
    pub fn potential_payout(
        &self,
        stake: Decimal,
        price: Cents,
        framing: PayoutFraming,
    ) -> ArithmeticResult<Decimal> {
        potential_payout(stake, price.get(), framing)
    }
}

/// Yes price under the default parameters.
#[must_use]
pub fn yes_price(pnl_percent: Decimal) -> Cents {
    QuoteModel::default().yes_price(pnl_percent)
}

/// No price under the default parameters.
#[must_use]
pub fn no_price(pnl_percent: Decimal) -> Cents {
    QuoteModel::default().no_price(pnl_percent)
}

/// Potential payout of `stake` at `price_cents`.
///
/// - [`PayoutFraming::ToWin`]: `stake / (price/100) - stake`
/// - [`PayoutFraming::Receive`]: `stake * (price/100)`
///
/// A zero stake returns zero for any price.
///
/// # Errors
///
/// - `ArithmeticError::InvalidValue` for a negative stake or a price
///   outside `[0, 100]`
/// - `ArithmeticError::DivisionByZero` for a zero price on the to-win path
/// - `ArithmeticError::Overflow` if the result leaves the decimal range
pub fn potential_payout(
    stake: Decimal,
    price_cents: Decimal,
    framing: PayoutFraming,
) -> ArithmeticResult<Decimal> {
    if stake < Decimal::ZERO {
        return Err(ArithmeticError::InvalidValue("stake must be non-negative"));
    }
    if stake.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if price_cents < Decimal::ZERO || price_cents > Decimal::ONE_HUNDRED {
        return Err(ArithmeticError::InvalidValue(
            "price must be within [0, 100] cents",
        ));
    }

    let fraction = price_cents.safe_div(Decimal::ONE_HUNDRED)?;
    match framing {
        PayoutFraming::ToWin => stake.safe_div(fraction)?.safe_sub(stake),
        PayoutFraming::Receive => stake.safe_mul(fraction),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    mod pricing {
        use super::*;

        #[test]
        fn flat_agent_is_even_money() {
            assert_eq!(yes_price(dec!(0)).get(), dec!(50));
            assert_eq!(no_price(dec!(0)).get(), dec!(50));
        }

        #[test]
        fn upper_clamp_boundary() {
            assert_eq!(yes_price(dec!(4)).get(), dec!(90));
            assert_eq!(yes_price(dec!(4.1)).get(), dec!(90));
            assert_eq!(no_price(dec!(4.1)).get(), dec!(10));
        }

        #[test]
        fn lower_clamp_boundary() {
            assert_eq!(yes_price(dec!(-4)).get(), dec!(10));
            assert_eq!(yes_price(dec!(-10)).get(), dec!(10));
            assert_eq!(no_price(dec!(-10)).get(), dec!(90));
        }

        #[test]
        fn linear_inside_the_band() {
            assert_eq!(yes_price(dec!(2.85)).get(), dec!(78.50));
            assert_eq!(yes_price(dec!(-0.89)).get(), dec!(41.10));
        }

        #[test]
        fn overflow_saturates_to_the_inputs_side() {
            assert_eq!(yes_price(Decimal::MAX).get(), dec!(90));
            assert_eq!(yes_price(Decimal::MIN).get(), dec!(10));
        }

        #[test]
        fn custom_bounds_are_respected() {
            let model = QuoteModel::new(
                QuoteModelConfig::default().with_bounds(dec!(5), dec!(95)),
            )
            .unwrap();
            assert_eq!(model.yes_price(dec!(10)).get(), dec!(95));
            assert_eq!(model.no_price(dec!(10)).get(), dec!(5));
        }
    }

    mod config {
        use super::*;

        #[test]
        fn default_is_valid() {
            assert!(QuoteModelConfig::default().validate().is_ok());
        }

        #[test]
        fn rejects_asymmetric_bounds() {
            let config = QuoteModelConfig::default().with_bounds(dec!(20), dec!(90));
            assert!(matches!(
                QuoteModel::new(config),
                Err(DomainError::InvalidConfig(_))
            ));
        }

        #[test]
        fn rejects_inverted_bounds() {
            let config = QuoteModelConfig::default().with_bounds(dec!(60), dec!(40));
            assert!(config.validate().is_err());
        }

        #[test]
        fn rejects_zero_floor() {
            let config = QuoteModelConfig::default().with_bounds(dec!(0), dec!(100));
            assert!(config.validate().is_err());
        }

        #[test]
        fn rejects_non_positive_sensitivity() {
            let config = QuoteModelConfig::default().with_sensitivity(dec!(0));
            assert!(config.validate().is_err());
        }

        #[test]
        fn deserializes_partial_config_with_defaults() {
            let config: QuoteModelConfig =
                serde_json::from_str(r#"{"sensitivity": "5"}"#).unwrap();
            assert_eq!(config.sensitivity(), dec!(5));
            assert_eq!(config.floor(), dec!(10));
            assert_eq!(config.ceiling(), dec!(90));
        }
    }

    mod payout {
        use super::*;

        #[test]
        fn zero_stake_pays_nothing_at_any_price() {
            for price in [dec!(0), dec!(10), dec!(50), dec!(100)] {
                assert_eq!(
                    potential_payout(dec!(0), price, PayoutFraming::ToWin).unwrap(),
                    dec!(0)
                );
                assert_eq!(
                    potential_payout(dec!(0), price, PayoutFraming::Receive).unwrap(),
                    dec!(0)
                );
            }
        }

        #[test]
        fn to_win_at_even_money_doubles() {
            assert_eq!(
                potential_payout(dec!(100), dec!(50), PayoutFraming::ToWin).unwrap(),
                dec!(100)
            );
        }

        #[test]
        fn to_win_at_zero_price_is_division_by_zero() {
            assert_eq!(
                potential_payout(dec!(100), dec!(0), PayoutFraming::ToWin),
                Err(ArithmeticError::DivisionByZero)
            );
        }

        #[test]
        fn receive_at_zero_price_is_zero() {
            assert_eq!(
                potential_payout(dec!(100), dec!(0), PayoutFraming::Receive).unwrap(),
                dec!(0)
            );
        }

        #[test]
        fn receive_scales_by_price() {
            assert_eq!(
                potential_payout(dec!(150), dec!(72), PayoutFraming::Receive).unwrap(),
                dec!(108)
            );
        }

        #[test]
        fn to_win_at_par_is_zero() {
            assert_eq!(
                potential_payout(dec!(40), dec!(100), PayoutFraming::ToWin).unwrap(),
                dec!(0)
            );
        }

        #[test]
        fn negative_stake_is_rejected() {
            assert!(matches!(
                potential_payout(dec!(-1), dec!(50), PayoutFraming::ToWin),
                Err(ArithmeticError::InvalidValue(_))
            ));
        }

        #[test]
        fn out_of_range_price_is_rejected() {
            assert!(matches!(
                potential_payout(dec!(10), dec!(101), PayoutFraming::Receive),
                Err(ArithmeticError::InvalidValue(_))
            ));
            assert!(matches!(
                potential_payout(dec!(10), dec!(-1), PayoutFraming::ToWin),
                Err(ArithmeticError::InvalidValue(_))
            ));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_pnl() -> impl Strategy<Value = Decimal> {
            (any::<i64>(), 0u32..12).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
        }

        proptest! {
            #[test]
            fn sides_always_sum_to_par(pnl in any_pnl()) {
                let sum = yes_price(pnl).get() + no_price(pnl).get();
                prop_assert_eq!(sum, dec!(100));
            }

            #[test]
            fn both_sides_stay_in_band(pnl in any_pnl()) {
                let yes = yes_price(pnl).get();
                let no = no_price(pnl).get();
                prop_assert!(yes >= dec!(10) && yes <= dec!(90));
                prop_assert!(no >= dec!(10) && no <= dec!(90));
            }

            #[test]
            fn yes_price_is_monotonic(a in any_pnl(), b in any_pnl()) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(yes_price(lo) <= yes_price(hi));
            }

            #[test]
            fn receive_never_exceeds_stake(stake in 0u32..1_000_000, price in 0u32..=100) {
                let stake = Decimal::from(stake);
                let paid = potential_payout(stake, Decimal::from(price), PayoutFraming::Receive).unwrap();
                prop_assert!(paid <= stake);
            }

            #[test]
            fn to_win_is_non_negative_for_quotable_prices(stake in 0u32..1_000_000, price in 10u32..=90) {
                let won = potential_payout(Decimal::from(stake), Decimal::from(price), PayoutFraming::ToWin).unwrap();
                prop_assert!(won >= Decimal::ZERO);
            }
        }
    }
}

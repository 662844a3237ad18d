//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! This module provides the core enumerations used throughout the arena:
//!
//! - [`Outcome`] - Yes or No side of a binary market
//! - [`TradeMode`] - Buy or Sell
//! - [`PayoutFraming`] - "To win" or "receive on sell"
//! - [`AgentStatus`] - Agent lifecycle status
//! - [`Asset`] - Assets an agent holds positions in
//! - [`PositionStatus`] - Whether a user position is still live
//! - [`LeaderboardPeriod`] - Weekly or all-time leaderboard
//! - [`PerformancePeriod`] - Daily, weekly or monthly performance
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of a binary-outcome market.
///
/// # Examples
///
/// ```
/// use agent_arena::domain::value_objects::enums::Outcome;
///
/// assert_eq!(Outcome::Yes.opposite(), Outcome::No);
/// assert_eq!(Outcome::No.to_string(), "No");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Outcome {
    /// The agent finishes with the highest P&L.
    #[default]
    Yes = 0,
    /// The agent does not finish first.
    No = 1,
}

impl Outcome {
    /// Returns the opposite outcome.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }

    /// Returns true for the Yes side.
    #[inline]
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

impl FromStr for Outcome {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "YES" | "Y" => Ok(Self::Yes),
            "NO" | "N" => Ok(Self::No),
            _ => Err(ParseEnumError::InvalidValue("Outcome", s.to_string())),
        }
    }
}

/// Direction of a trade ticket.
///
/// When buying the stake is a dollar amount; when selling it is a share
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TradeMode {
    /// Buy shares with a dollar stake.
    #[default]
    Buy = 0,
    /// Sell a number of shares.
    Sell = 1,
}

impl TradeMode {
    /// Returns true if this is the buy mode.
    #[inline]
    #[must_use]
    pub const fn is_buy(self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Payout framing used when previewing a ticket in this mode.
    #[inline]
    #[must_use]
    pub const fn framing(self) -> PayoutFraming {
        match self {
            Self::Buy => PayoutFraming::ToWin,
            Self::Sell => PayoutFraming::Receive,
        }
    }

    /// Past-tense verb used by the activity feed.
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Buy => "bought",
            Self::Sell => "sold",
        }
    }
}

impl fmt::Display for TradeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

impl FromStr for TradeMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" | "BOUGHT" => Ok(Self::Buy),
            "SELL" | "SOLD" => Ok(Self::Sell),
            _ => Err(ParseEnumError::InvalidValue("TradeMode", s.to_string())),
        }
    }
}

/// How a potential payout is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutFraming {
    /// Net winnings if the side resolves in the buyer's favour.
    ToWin,
    /// Proceeds from selling shares at the side's price.
    Receive,
}

impl PayoutFraming {
    /// Label shown above the payout figure.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToWin => "To win",
            Self::Receive => "You'll receive",
        }
    }
}

impl fmt::Display for PayoutFraming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Agent lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgentStatus {
    /// Trading normally.
    #[default]
    Active,
    /// Wiped out before the session ended.
    Liquidated,
    /// Halted by its operator.
    Stopped,
}

impl AgentStatus {
    /// Returns true if the agent can still win the market.
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Liquidated => write!(f, "Liquidated"),
            Self::Stopped => write!(f, "Stopped"),
        }
    }
}

impl FromStr for AgentStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "LIQUIDATED" => Ok(Self::Liquidated),
            "STOPPED" => Ok(Self::Stopped),
            _ => Err(ParseEnumError::InvalidValue("AgentStatus", s.to_string())),
        }
    }
}

/// Assets the arena agents trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Asset {
    /// Bitcoin.
    Btc,
    /// Solana.
    Sol,
    /// Ethereum.
    Eth,
    /// XRP.
    Xrp,
    /// BNB.
    Bnb,
}

impl Asset {
    /// All assets, in display order.
    pub const ALL: [Asset; 5] = [Self::Btc, Self::Sol, Self::Eth, Self::Xrp, Self::Bnb];

    /// Ticker symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Sol => "SOL",
            Self::Eth => "ETH",
            Self::Xrp => "XRP",
            Self::Bnb => "BNB",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Asset {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BTC" => Ok(Self::Btc),
            "SOL" => Ok(Self::Sol),
            "ETH" => Ok(Self::Eth),
            "XRP" => Ok(Self::Xrp),
            "BNB" => Ok(Self::Bnb),
            _ => Err(ParseEnumError::InvalidValue("Asset", s.to_string())),
        }
    }
}

/// Whether a user position is still live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PositionStatus {
    /// Market still open.
    #[default]
    Active,
    /// Market has resolved.
    Resolved,
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

/// Leaderboard time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardPeriod {
    /// Current week.
    #[default]
    Weekly,
    /// Since launch.
    AllTime,
}

impl LeaderboardPeriod {
    /// Factor applied to total profit to estimate traded volume.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_arena::domain::value_objects::enums::LeaderboardPeriod;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(LeaderboardPeriod::Weekly.volume_multiplier(), Decimal::new(25, 1));
    /// ```
    #[must_use]
    pub fn volume_multiplier(self) -> Decimal {
        match self {
            Self::Weekly => Decimal::new(25, 1),
            Self::AllTime => Decimal::new(32, 1),
        }
    }
}

impl fmt::Display for LeaderboardPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::AllTime => write!(f, "All Time"),
        }
    }
}

impl FromStr for LeaderboardPeriod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['-', ' '], "_").as_str() {
            "WEEKLY" | "WEEK" => Ok(Self::Weekly),
            "ALL_TIME" | "ALLTIME" | "ALL" => Ok(Self::AllTime),
            _ => Err(ParseEnumError::InvalidValue(
                "LeaderboardPeriod",
                s.to_string(),
            )),
        }
    }
}

/// Granularity of an agent's performance chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PerformancePeriod {
    /// One point per day.
    #[default]
    Daily,
    /// One point per week.
    Weekly,
    /// One point per month.
    Monthly,
}

impl fmt::Display for PerformancePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "D"),
            Self::Weekly => write!(f, "W"),
            Self::Monthly => write!(f, "M"),
        }
    }
}

impl FromStr for PerformancePeriod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "D" | "DAILY" => Ok(Self::Daily),
            "W" | "WEEKLY" => Ok(Self::Weekly),
            "M" | "MONTHLY" => Ok(Self::Monthly),
            _ => Err(ParseEnumError::InvalidValue(
                "PerformancePeriod",
                s.to_string(),
            )),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

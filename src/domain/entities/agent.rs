//! # Agent Entity
//!
//! A simulated trading bot competing for the highest P&L.
//!
//! Agents are fixture data: built once, never mutated by trading.
//!
//! # Examples
//!
//! ```
//! use agent_arena::domain::entities::agent::{Agent, AssetPosition};
//! use agent_arena::domain::value_objects::{AgentId, Asset};
//! use rust_decimal::Decimal;
//!
//! let agent = Agent::builder(AgentId::new("1"), "QuantumTrader AI")
//!     .pnl(Decimal::new(285075, 2))
//!     .pnl_percent(Decimal::new(285, 2))
//!     .portfolio(Decimal::new(100_000, 0))
//!     .position(AssetPosition::new(Asset::Btc, Decimal::new(35_000, 0), Decimal::new(120530, 2), 5))
//!     .build();
//!
//! assert_eq!(agent.initials(), "QA");
//! assert_eq!(agent.percent_change_label(), "+2.85%");
//! ```

use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use crate::domain::value_objects::usd::fixed;
use crate::domain::value_objects::{AgentId, AgentStatus, Asset, Usd};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An agent's exposure to one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPosition {
    asset: Asset,
    amount: Decimal,
    pnl: Decimal,
    leverage: u8,
}

impl AssetPosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(asset: Asset, amount: Decimal, pnl: Decimal, leverage: u8) -> Self {
        Self {
            asset,
            amount,
            pnl,
            leverage,
        }
    }

    /// Returns the asset.
    #[inline]
    #[must_use]
    pub const fn asset(&self) -> Asset {
        self.asset
    }

    /// Returns the notional amount in dollars.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Usd {
        Usd::new(self.amount)
    }

    /// Returns the position P&L.
    #[inline]
    #[must_use]
    pub fn pnl(&self) -> Usd {
        Usd::new(self.pnl)
    }

    /// Returns the leverage multiple.
    #[inline]
    #[must_use]
    pub const fn leverage(&self) -> u8 {
        self.leverage
    }

    /// Leverage caption, e.g. `5x Leverage`.
    #[must_use]
    pub fn leverage_label(&self) -> String {
        format!("{}x Leverage", self.leverage)
    }
}

/// A simulated trading agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    name: String,
    pnl: Decimal,
    pnl_percent: Decimal,
    status: AgentStatus,
    portfolio: Decimal,
    win_rate: Decimal,
    volume: Decimal,
    strategy: String,
    positions: Vec<AssetPosition>,
}

impl Agent {
    /// Returns a builder with zeroed figures.
    #[must_use]
    pub fn builder(id: AgentId, name: impl Into<String>) -> AgentBuilder {
        AgentBuilder::new(id, name)
    }

    /// Returns the agent id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the session P&L.
    #[inline]
    #[must_use]
    pub fn pnl(&self) -> Usd {
        Usd::new(self.pnl)
    }

    /// Returns the simulated P&L percentage that drives the quote.
    #[inline]
    #[must_use]
    pub const fn pnl_percent(&self) -> Decimal {
        self.pnl_percent
    }

    /// Returns the lifecycle status.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> AgentStatus {
        self.status
    }

    /// Returns the portfolio balance.
    #[inline]
    #[must_use]
    pub fn portfolio(&self) -> Usd {
        Usd::new(self.portfolio)
    }

    /// Returns the win rate in percent.
    #[inline]
    #[must_use]
    pub const fn win_rate(&self) -> Decimal {
        self.win_rate
    }

    /// Returns the traded volume.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> Usd {
        Usd::new(self.volume)
    }

    /// Returns the strategy description.
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Returns the per-asset positions.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[AssetPosition] {
        &self.positions
    }

    /// Returns the position in `asset`, if any.
    #[must_use]
    pub fn position(&self, asset: Asset) -> Option<&AssetPosition> {
        self.positions.iter().find(|p| p.asset == asset)
    }

    /// P&L relative to the portfolio, in percent.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` for an empty portfolio.
    pub fn percent_change(&self) -> ArithmeticResult<Decimal> {
        self.pnl
            .safe_div(self.portfolio)?
            .safe_mul(Decimal::ONE_HUNDRED)
    }

    /// Signed two-decimal percent change, e.g. `+2.85%`.
    ///
    /// Renders `n/a` when the portfolio is empty.
    #[must_use]
    pub fn percent_change_label(&self) -> String {
        match self.percent_change() {
            Ok(change) => {
                let sign = if self.pnl >= Decimal::ZERO { "+" } else { "" };
                format!("{sign}{}%", fixed(change, 2))
            }
            Err(_) => "n/a".to_string(),
        }
    }

    /// First letter of each word of the name.
    #[must_use]
    pub fn initials(&self) -> String {
        crate::domain::services::avatar::initials(&self.name)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent({} {} {})", self.id, self.name, self.status)
    }
}

/// Builder for [`Agent`].
#[derive(Debug, Clone)]
pub struct AgentBuilder {
    agent: Agent,
}

impl AgentBuilder {
    /// Starts a builder.
    #[must_use]
    pub fn new(id: AgentId, name: impl Into<String>) -> Self {
        Self {
            agent: Agent {
                id,
                name: name.into(),
                pnl: Decimal::ZERO,
                pnl_percent: Decimal::ZERO,
                status: AgentStatus::Active,
                portfolio: Decimal::ZERO,
                win_rate: Decimal::ZERO,
                volume: Decimal::ZERO,
                strategy: String::new(),
                positions: Vec::new(),
            },
        }
    }

    /// Sets the P&L.
    #[must_use]
    pub fn pnl(mut self, pnl: Decimal) -> Self {
        self.agent.pnl = pnl;
        self
    }

    /// Sets the P&L percentage.
    #[must_use]
    pub fn pnl_percent(mut self, pnl_percent: Decimal) -> Self {
        self.agent.pnl_percent = pnl_percent;
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn status(mut self, status: AgentStatus) -> Self {
        self.agent.status = status;
        self
    }

    /// Sets the portfolio balance.
    #[must_use]
    pub fn portfolio(mut self, portfolio: Decimal) -> Self {
        self.agent.portfolio = portfolio;
        self
    }

    /// Sets the win rate.
    #[must_use]
    pub fn win_rate(mut self, win_rate: Decimal) -> Self {
        self.agent.win_rate = win_rate;
        self
    }

    /// Sets the traded volume.
    #[must_use]
    pub fn volume(mut self, volume: Decimal) -> Self {
        self.agent.volume = volume;
        self
    }

    /// Sets the strategy description.
    #[must_use]
    pub fn strategy(mut self, strategy: impl Into<String>) -> Self {
        self.agent.strategy = strategy.into();
        self
    }

    /// Adds a position.
    #[must_use]
    pub fn position(mut self, position: AssetPosition) -> Self {
        self.agent.positions.push(position);
        self
    }

    /// Finishes the agent.
    #[must_use]
    pub fn build(self) -> Agent {
        self.agent
    }
}

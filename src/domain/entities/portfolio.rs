//! # Portfolio Entities
//!
//! The current user's open positions and trade history.
//!
//! Prices here are in dollars per share (`0.65` = 65¢), as recorded.

use crate::domain::value_objects::{Outcome, PositionStatus, Timestamp, TradeMode, Usd};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A position the user holds in one agent market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPosition {
    id: String,
    market: String,
    outcome: Outcome,
    shares: u64,
    avg_price: Decimal,
    current_price: Decimal,
    value: Decimal,
    pnl: Decimal,
    status: PositionStatus,
}

impl UserPosition {
    /// Creates a position.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        market: impl Into<String>,
        outcome: Outcome,
        shares: u64,
        avg_price: Decimal,
        current_price: Decimal,
        value: Decimal,
        pnl: Decimal,
        status: PositionStatus,
    ) -> Self {
        Self {
            id: id.into(),
            market: market.into(),
            outcome,
            shares,
            avg_price,
            current_price,
            value,
            pnl,
            status,
        }
    }

    /// Returns the position id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the market question.
    #[inline]
    #[must_use]
    pub fn market(&self) -> &str {
        &self.market
    }

    /// Returns the held side.
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the share count.
    #[inline]
    #[must_use]
    pub const fn shares(&self) -> u64 {
        self.shares
    }

    /// Returns the average entry price per share.
    #[inline]
    #[must_use]
    pub const fn avg_price(&self) -> Decimal {
        self.avg_price
    }

    /// Returns the current price per share.
    #[inline]
    #[must_use]
    pub const fn current_price(&self) -> Decimal {
        self.current_price
    }

    /// Returns the marked value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Usd {
        Usd::new(self.value)
    }

    /// Returns the P&L.
    #[inline]
    #[must_use]
    pub fn pnl(&self) -> Usd {
        Usd::new(self.pnl)
    }

    /// Returns whether the market is still open.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> PositionStatus {
        self.status
    }

    /// Returns true if the position is in profit.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.pnl > Decimal::ZERO
    }
}

/// A past trade by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: String,
    market: String,
    action: TradeMode,
    outcome: Outcome,
    shares: u64,
    price: Decimal,
    value: Decimal,
    at: Timestamp,
}

impl HistoryEntry {
    /// Creates a history entry.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        market: impl Into<String>,
        action: TradeMode,
        outcome: Outcome,
        shares: u64,
        price: Decimal,
        value: Decimal,
        at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            market: market.into(),
            action,
            outcome,
            shares,
            price,
            value,
            at,
        }
    }

    /// Returns the entry id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the market question.
    #[inline]
    #[must_use]
    pub fn market(&self) -> &str {
        &self.market
    }

    /// Returns buy or sell.
    #[inline]
    #[must_use]
    pub const fn action(&self) -> TradeMode {
        self.action
    }

    /// Returns the traded side.
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the share count.
    #[inline]
    #[must_use]
    pub const fn shares(&self) -> u64 {
        self.shares
    }

    /// Returns the price per share.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the trade value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Usd {
        Usd::new(self.value)
    }

    /// Returns when the trade happened.
    #[inline]
    #[must_use]
    pub const fn at(&self) -> Timestamp {
        self.at
    }
}

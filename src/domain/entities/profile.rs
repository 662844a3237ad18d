//! # Agent Profile
//!
//! Long-form statistics for an agent: performance series per period and
//! recent strategy notes.

use crate::domain::value_objects::{AgentId, Asset, PerformancePeriod, Usd};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of a performance series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformancePoint {
    label: String,
    pnl: Decimal,
    portfolio: Decimal,
    rank: u32,
    is_today: bool,
}

impl PerformancePoint {
    /// Creates a point.
    #[must_use]
    pub fn new(label: impl Into<String>, pnl: Decimal, portfolio: Decimal, rank: u32) -> Self {
        Self {
            label: label.into(),
            pnl,
            portfolio,
            rank,
            is_today: false,
        }
    }

    /// Marks the point as the current period.
    #[must_use]
    pub fn today(mut self) -> Self {
        self.is_today = true;
        self
    }

    /// Returns the axis label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the period P&L.
    #[inline]
    #[must_use]
    pub fn pnl(&self) -> Usd {
        Usd::new(self.pnl)
    }

    /// Returns the closing portfolio value.
    #[inline]
    #[must_use]
    pub fn portfolio(&self) -> Usd {
        Usd::new(self.portfolio)
    }

    /// Returns the arena rank at period close.
    #[inline]
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    /// Returns true for the current, still open period.
    #[inline]
    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.is_today
    }
}

/// A dated note on what the agent was doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyNote {
    day: String,
    strategy: String,
    allocation: Vec<(Asset, u8)>,
    leverage: String,
    confidence: u8,
}

impl StrategyNote {
    /// Creates a note.
    #[must_use]
    pub fn new(
        day: impl Into<String>,
        strategy: impl Into<String>,
        allocation: Vec<(Asset, u8)>,
        leverage: impl Into<String>,
        confidence: u8,
    ) -> Self {
        Self {
            day: day.into(),
            strategy: strategy.into(),
            allocation,
            leverage: leverage.into(),
            confidence,
        }
    }

    /// Returns the day label.
    #[inline]
    #[must_use]
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Returns the strategy summary.
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Returns the allocation in percent per asset.
    #[inline]
    #[must_use]
    pub fn allocation(&self) -> &[(Asset, u8)] {
        &self.allocation
    }

    /// Returns the leverage label, e.g. `5x avg`.
    #[inline]
    #[must_use]
    pub fn leverage(&self) -> &str {
        &self.leverage
    }

    /// Returns the confidence score out of 100.
    #[inline]
    #[must_use]
    pub const fn confidence(&self) -> u8 {
        self.confidence
    }

    /// Sum of allocation percentages, normally 100.
    #[must_use]
    pub fn allocated_percent(&self) -> u32 {
        self.allocation.iter().map(|(_, pct)| u32::from(*pct)).sum()
    }
}

/// Profile of one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    agent_id: AgentId,
    name: String,
    description: String,
    win_rate: Decimal,
    top_three_rate: Decimal,
    wins: u32,
    sessions: u32,
    total_trades: u64,
    total_profit: Decimal,
    rank: u32,
    followers: u64,
    join_date: String,
    daily: Vec<PerformancePoint>,
    weekly: Vec<PerformancePoint>,
    monthly: Vec<PerformancePoint>,
    strategies: Vec<StrategyNote>,
}

impl AgentProfile {
    /// Starts a builder.
    #[must_use]
    pub fn builder(agent_id: AgentId, name: impl Into<String>) -> AgentProfileBuilder {
        AgentProfileBuilder::new(agent_id, name)
    }

    /// Returns the agent id.
    #[inline]
    #[must_use]
    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Returns the agent name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the win rate in percent.
    #[inline]
    #[must_use]
    pub const fn win_rate(&self) -> Decimal {
        self.win_rate
    }

    /// Returns the top-three finish rate in percent.
    #[inline]
    #[must_use]
    pub const fn top_three_rate(&self) -> Decimal {
        self.top_three_rate
    }

    /// Returns `wins/sessions`, e.g. `3/8`.
    #[must_use]
    pub fn record(&self) -> String {
        format!("{}/{}", self.wins, self.sessions)
    }

    /// Returns the lifetime trade count.
    #[inline]
    #[must_use]
    pub const fn total_trades(&self) -> u64 {
        self.total_trades
    }

    /// Returns the lifetime profit.
    #[inline]
    #[must_use]
    pub fn total_profit(&self) -> Usd {
        Usd::new(self.total_profit)
    }

    /// Returns the current rank.
    #[inline]
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    /// Returns the follower count.
    #[inline]
    #[must_use]
    pub const fn followers(&self) -> u64 {
        self.followers
    }

    /// Returns the join date label.
    #[inline]
    #[must_use]
    pub fn join_date(&self) -> &str {
        &self.join_date
    }

    /// Performance series for a period.
    #[must_use]
    pub fn performance(&self, period: PerformancePeriod) -> &[PerformancePoint] {
        match period {
            PerformancePeriod::Daily => &self.daily,
            PerformancePeriod::Weekly => &self.weekly,
            PerformancePeriod::Monthly => &self.monthly,
        }
    }

    /// Returns the strategy notes, newest first.
    #[inline]
    #[must_use]
    pub fn strategies(&self) -> &[StrategyNote] {
        &self.strategies
    }
}

/// Builder for [`AgentProfile`].
#[derive(Debug, Clone)]
pub struct AgentProfileBuilder {
    profile: AgentProfile,
}

impl AgentProfileBuilder {
    /// Starts a builder with empty statistics.
    #[must_use]
    pub fn new(agent_id: AgentId, name: impl Into<String>) -> Self {
        Self {
            profile: AgentProfile {
                agent_id,
                name: name.into(),
                description: String::new(),
                win_rate: Decimal::ZERO,
                top_three_rate: Decimal::ZERO,
                wins: 0,
                sessions: 0,
                total_trades: 0,
                total_profit: Decimal::ZERO,
                rank: 0,
                followers: 0,
                join_date: String::new(),
                daily: Vec::new(),
                weekly: Vec::new(),
                monthly: Vec::new(),
                strategies: Vec::new(),
            },
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.profile.description = description.into();
        self
    }

    /// Sets win and top-three rates.
    #[must_use]
    pub fn rates(mut self, win_rate: Decimal, top_three_rate: Decimal) -> Self {
        self.profile.win_rate = win_rate;
        self.profile.top_three_rate = top_three_rate;
        self
    }

    /// Sets the session record.
    #[must_use]
    pub fn record(mut self, wins: u32, sessions: u32) -> Self {
        self.profile.wins = wins;
        self.profile.sessions = sessions;
        self
    }

    /// Sets lifetime trades and profit.
    #[must_use]
    pub fn totals(mut self, total_trades: u64, total_profit: Decimal) -> Self {
        self.profile.total_trades = total_trades;
        self.profile.total_profit = total_profit;
        self
    }

    /// Sets rank, followers and join date.
    #[must_use]
    pub fn standing(mut self, rank: u32, followers: u64, join_date: impl Into<String>) -> Self {
        self.profile.rank = rank;
        self.profile.followers = followers;
        self.profile.join_date = join_date.into();
        self
    }

    /// Sets the series for one period.
    #[must_use]
    pub fn performance(mut self, period: PerformancePeriod, points: Vec<PerformancePoint>) -> Self {
        match period {
            PerformancePeriod::Daily => self.profile.daily = points,
            PerformancePeriod::Weekly => self.profile.weekly = points,
            PerformancePeriod::Monthly => self.profile.monthly = points,
        }
        self
    }

    /// Appends a strategy note.
    #[must_use]
    pub fn strategy(mut self, note: StrategyNote) -> Self {
        self.profile.strategies.push(note);
        self
    }

    /// Builds the profile.
    #[must_use]
    pub fn build(self) -> AgentProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn profile() -> AgentProfile {
        AgentProfile::builder(AgentId::new("1"), "QuantumTrader AI")
            .record(3, 8)
            .performance(
                PerformancePeriod::Weekly,
                vec![
                    PerformancePoint::new("Week 1", dec!(5420), dec!(105420), 1),
                    PerformancePoint::new("Week 2", dec!(3210), dec!(108630), 2).today(),
                ],
            )
            .strategy(StrategyNote::new(
                "Today",
                "Momentum",
                vec![(Asset::Btc, 60), (Asset::Eth, 40)],
                "5x avg",
                85,
            ))
            .build()
    }

    #[test]
    fn performance_by_period() {
        let profile = profile();
        assert_eq!(profile.performance(PerformancePeriod::Weekly).len(), 2);
        assert!(profile.performance(PerformancePeriod::Daily).is_empty());
        let last = profile.performance(PerformancePeriod::Weekly).last();
        assert!(last.is_some_and(PerformancePoint::is_today));
    }

    #[test]
    fn record_and_allocation() {
        let profile = profile();
        assert_eq!(profile.record(), "3/8");
        assert_eq!(
            profile.strategies().first().map(StrategyNote::allocated_percent),
            Some(100)
        );
    }
}

//! # Agent Profile View
//!
//! View state of an agent's profile page.
//!
//! At most one history row is expanded at a time; toggling the expanded row
//! collapses it.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{AgentProfile, PerformancePoint};
use crate::domain::value_objects::{AgentId, PerformancePeriod};
use crate::infrastructure::persistence::ProfileRepository;
use serde::{Deserialize, Serialize};

/// Top-level profile tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    /// Headline stats and performance chart.
    #[default]
    Overview,
    /// Strategy notes.
    Strategy,
    /// Performance history table.
    History,
}

/// Tab inside the trades panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradesTab {
    /// Open positions.
    #[default]
    Positions,
    /// Closed trades.
    Closed,
}

/// The profile page.
#[derive(Debug, Clone)]
pub struct ProfileView {
    profile: AgentProfile,
    tab: ProfileTab,
    period: PerformancePeriod,
    compare: bool,
    trades_tab: TradesTab,
    expanded_row: Option<usize>,
}

impl ProfileView {
    /// Opens the page on the overview with daily performance.
    #[must_use]
    pub fn new(profile: AgentProfile) -> Self {
        Self {
            profile,
            tab: ProfileTab::default(),
            period: PerformancePeriod::Daily,
            compare: false,
            trades_tab: TradesTab::default(),
            expanded_row: None,
        }
    }

    /// Loads the profile of `agent_id`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if the agent has no profile.
    pub fn load(repo: &dyn ProfileRepository, agent_id: &AgentId) -> ApplicationResult<Self> {
        repo.get(agent_id)?
            .map(Self::new)
            .ok_or_else(|| ApplicationError::not_found("AgentProfile", agent_id.as_str()))
    }

    /// Returns the profile.
    #[inline]
    #[must_use]
    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    /// Returns the tab.
    #[inline]
    #[must_use]
    pub const fn tab(&self) -> ProfileTab {
        self.tab
    }

    /// Switches tab.
    pub fn set_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    /// Returns the performance period.
    #[inline]
    #[must_use]
    pub const fn period(&self) -> PerformancePeriod {
        self.period
    }

    /// Switches period. The expanded history row belongs to the old
    /// series, so it collapses.
    pub fn set_period(&mut self, period: PerformancePeriod) {
        if self.period != period {
            self.expanded_row = None;
        }
        self.period = period;
    }

    /// Returns true if the comparison overlay is on.
    #[inline]
    #[must_use]
    pub const fn compare(&self) -> bool {
        self.compare
    }

    /// Flips the comparison overlay.
    pub fn toggle_compare(&mut self) {
        self.compare = !self.compare;
    }

    /// Returns the trades tab.
    #[inline]
    #[must_use]
    pub const fn trades_tab(&self) -> TradesTab {
        self.trades_tab
    }

    /// Switches the trades tab.
    pub fn set_trades_tab(&mut self, tab: TradesTab) {
        self.trades_tab = tab;
    }

    /// Performance series for the selected period.
    #[must_use]
    pub fn series(&self) -> &[PerformancePoint] {
        self.profile.performance(self.period)
    }

    /// Expands a history row, or collapses it if already expanded.
    /// Out-of-range rows are ignored.
    pub fn toggle_row(&mut self, index: usize) {
        if index >= self.series().len() {
            return;
        }
        self.expanded_row = match self.expanded_row {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    /// The expanded history row.
    #[must_use]
    pub fn expanded_row(&self) -> Option<&PerformancePoint> {
        self.expanded_row.and_then(|i| self.series().get(i))
    }
}

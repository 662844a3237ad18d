//! # Leaderboard Service
//!
//! Profit and volume leaders for a period.
//!
//! Volume is derived from profit: `profit * 2.5` weekly, `profit * 3.2`
//! all-time, rounded to whole dollars.

use crate::application::error::ApplicationResult;
use crate::domain::entities::LeaderboardEntry;
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::{LeaderboardPeriod, Usd};
use crate::domain::DomainError;
use crate::infrastructure::persistence::LeaderboardRepository;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::sync::Arc;

/// Default number of leaders shown per table.
pub const DEFAULT_TOP_N: usize = 5;

/// A user ranked by traded volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeLeader {
    /// 1-based rank.
    pub rank: usize,
    /// Username.
    pub username: String,
    /// Whole-dollar volume.
    pub volume: Usd,
}

/// Reads profit tables and derives the leader views.
#[derive(Clone)]
pub struct LeaderboardService {
    repository: Arc<dyn LeaderboardRepository>,
    top_n: usize,
}

impl std::fmt::Debug for LeaderboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardService")
            .field("top_n", &self.top_n)
            .finish_non_exhaustive()
    }
}

impl LeaderboardService {
    /// Creates a service showing [`DEFAULT_TOP_N`] leaders.
    #[must_use]
    pub fn new(repository: Arc<dyn LeaderboardRepository>) -> Self {
        Self {
            repository,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Sets how many leaders to show. Zero shows none.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Returns how many leaders are shown.
    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n
    }

    /// Top users by profit, re-ranked from 1.
    ///
    /// Ties keep their stored order.
    ///
    /// # Errors
    ///
    /// Returns a repository error if the table cannot be read.
    pub fn profit_leaders(&self, period: LeaderboardPeriod) -> ApplicationResult<Vec<LeaderboardEntry>> {
        let mut entries = self.repository.entries(period)?;
        entries.sort_by(|a, b| b.total_profit().cmp(&a.total_profit()));
        Ok(entries
            .iter()
            .take(self.top_n)
            .zip(1usize..)
            .map(|(entry, rank)| entry.with_rank(rank))
            .collect())
    }

    /// Top users by derived volume.
    ///
    /// # Errors
    ///
    /// Returns a repository error, or an arithmetic error if a volume
    /// overflows.
    pub fn volume_leaders(&self, period: LeaderboardPeriod) -> ApplicationResult<Vec<VolumeLeader>> {
        let multiplier = period.volume_multiplier();
        self.profit_leaders(period)?
            .into_iter()
            .map(|entry| {
                let volume = volume_for(entry.total_profit().get(), multiplier)?;
                Ok(VolumeLeader {
                    rank: entry.rank(),
                    username: entry.username().to_string(),
                    volume: Usd::new(volume),
                })
            })
            .collect()
    }
}

fn volume_for(profit: Decimal, multiplier: Decimal) -> Result<Decimal, DomainError> {
    Ok(profit
        .safe_mul(multiplier)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

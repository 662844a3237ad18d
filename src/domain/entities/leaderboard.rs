//! # Leaderboard Entries
//!
//! A user's standing in the weekly or all-time profit table.

use crate::domain::value_objects::Usd;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    rank: usize,
    username: String,
    total_profit: Decimal,
}

impl LeaderboardEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(rank: usize, username: impl Into<String>, total_profit: Decimal) -> Self {
        Self {
            rank,
            username: username.into(),
            total_profit,
        }
    }

    /// Returns the rank (1 = best).
    #[inline]
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the username.
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the total profit.
    #[inline]
    #[must_use]
    pub fn total_profit(&self) -> Usd {
        Usd::new(self.total_profit)
    }

    /// Returns a copy with a different rank.
    #[must_use]
    pub fn with_rank(&self, rank: usize) -> Self {
        Self {
            rank,
            ..self.clone()
        }
    }

    /// Rank badge for this entry.
    #[must_use]
    pub fn badge(&self) -> RankBadge {
        RankBadge::for_rank(self.rank)
    }
}

/// Badge shown next to a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankBadge {
    /// First place.
    Trophy,
    /// Second place.
    Medal,
    /// Third place.
    Award,
    /// Any other rank.
    Numbered(usize),
}

impl RankBadge {
    /// Badge for a rank.
    #[must_use]
    pub const fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Self::Trophy,
            2 => Self::Medal,
            3 => Self::Award,
            n => Self::Numbered(n),
        }
    }

    /// `Top n` tag for podium ranks.
    #[must_use]
    pub fn podium_tag(&self) -> Option<String> {
        match self {
            Self::Trophy => Some("Top 1".to_string()),
            Self::Medal => Some("Top 2".to_string()),
            Self::Award => Some("Top 3".to_string()),
            Self::Numbered(_) => None,
        }
    }
}

impl fmt::Display for RankBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trophy => write!(f, "🏆"),
            Self::Medal => write!(f, "🥈"),
            Self::Award => write!(f, "🥉"),
            Self::Numbered(n) => write!(f, "#{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podium_badges() {
        assert_eq!(RankBadge::for_rank(1), RankBadge::Trophy);
        assert_eq!(RankBadge::for_rank(3).podium_tag().as_deref(), Some("Top 3"));
        assert_eq!(RankBadge::for_rank(4).podium_tag(), None);
        assert_eq!(RankBadge::for_rank(7).to_string(), "#7");
    }

    #[test]
    fn with_rank_keeps_other_fields() {
        let entry = LeaderboardEntry::new(9, "EtaElite", Decimal::new(82390, 2));
        let moved = entry.with_rank(2);
        assert_eq!(moved.rank(), 2);
        assert_eq!(moved.username(), "EtaElite");
        assert_eq!(moved.total_profit(), entry.total_profit());
    }
}

//! # In-Memory Leaderboard Repository
//!
//! In-memory implementation of [`LeaderboardRepository`].

use super::fixtures;
use crate::domain::entities::LeaderboardEntry;
use crate::domain::value_objects::LeaderboardPeriod;
use crate::infrastructure::persistence::traits::{LeaderboardRepository, RepositoryResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory implementation of [`LeaderboardRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboardRepository {
    storage: Arc<RwLock<HashMap<LeaderboardPeriod, Vec<LeaderboardEntry>>>>,
}

impl InMemoryLeaderboardRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository with the weekly and all-time demo tables.
    #[must_use]
    pub fn with_fixtures() -> Self {
        let storage = [LeaderboardPeriod::Weekly, LeaderboardPeriod::AllTime]
            .into_iter()
            .map(|period| (period, fixtures::leaderboard(period)))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }
}

impl LeaderboardRepository for InMemoryLeaderboardRepository {
    fn entries(&self, period: LeaderboardPeriod) -> RepositoryResult<Vec<LeaderboardEntry>> {
        Ok(self
            .storage
            .read()
            .get(&period)
            .cloned()
            .unwrap_or_default())
    }

    fn replace(
        &self,
        period: LeaderboardPeriod,
        entries: Vec<LeaderboardEntry>,
    ) -> RepositoryResult<()> {
        self.storage.write().insert(period, entries);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_ten_rows() {
        let repo = InMemoryLeaderboardRepository::with_fixtures();
        assert_eq!(repo.entries(LeaderboardPeriod::Weekly).unwrap().len(), 10);
        assert_eq!(repo.entries(LeaderboardPeriod::AllTime).unwrap().len(), 10);
    }

    #[test]
    fn empty_until_replaced() {
        let repo = InMemoryLeaderboardRepository::new();
        assert!(repo.entries(LeaderboardPeriod::Weekly).unwrap().is_empty());
        repo.replace(
            LeaderboardPeriod::Weekly,
            fixtures::leaderboard(LeaderboardPeriod::Weekly),
        )
        .unwrap();
        assert!(!repo.entries(LeaderboardPeriod::Weekly).unwrap().is_empty());
    }
}

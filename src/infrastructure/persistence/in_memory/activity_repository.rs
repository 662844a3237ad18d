//! # In-Memory Activity Repository
//!
//! In-memory implementation of [`ActivityRepository`].

use super::fixtures;
use crate::domain::entities::ActivityItem;
use crate::domain::value_objects::Timestamp;
use crate::infrastructure::persistence::traits::{
    ActivityRepository, RepositoryError, RepositoryResult,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory implementation of [`ActivityRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    storage: Arc<RwLock<Vec<ActivityItem>>>,
}

impl InMemoryActivityRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository with the demo feed, aged relative to `now`.
    #[must_use]
    pub fn with_fixtures(now: Timestamp) -> Self {
        Self {
            storage: Arc::new(RwLock::new(fixtures::activity(now))),
        }
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    fn record(&self, item: ActivityItem) -> RepositoryResult<()> {
        let mut storage = self.storage.write();
        if storage.iter().any(|existing| existing.id() == item.id()) {
            return Err(RepositoryError::duplicate("ActivityItem", item.id()));
        }
        storage.push(item);
        Ok(())
    }

    fn recent(&self) -> RepositoryResult<Vec<ActivityItem>> {
        let mut items = self.storage.read().clone();
        items.sort_by(|a, b| b.at().cmp(&a.at()));
        Ok(items)
    }
}

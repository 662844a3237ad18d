//! # In-Memory Portfolio Repository
//!
//! In-memory implementation of [`PortfolioRepository`].

use super::fixtures;
use crate::domain::entities::{HistoryEntry, UserPosition};
use crate::infrastructure::persistence::traits::{PortfolioRepository, RepositoryResult};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Book {
    positions: Vec<UserPosition>,
    history: Vec<HistoryEntry>,
}

/// In-memory implementation of [`PortfolioRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolioRepository {
    storage: Arc<RwLock<Book>>,
}

impl InMemoryPortfolioRepository {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the sample user's book.
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Book {
                positions: fixtures::positions(),
                history: fixtures::history(),
            })),
        }
    }

    /// Appends a history entry.
    pub fn push_history(&self, entry: HistoryEntry) {
        self.storage.write().history.insert(0, entry);
    }
}

impl PortfolioRepository for InMemoryPortfolioRepository {
    fn positions(&self) -> RepositoryResult<Vec<UserPosition>> {
        Ok(self.storage.read().positions.clone())
    }

    fn history(&self) -> RepositoryResult<Vec<HistoryEntry>> {
        Ok(self.storage.read().history.clone())
    }
}

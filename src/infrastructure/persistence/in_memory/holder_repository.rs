//! # In-Memory Holder Repository
//!
//! In-memory implementation of [`HolderRepository`].

use super::fixtures;
use crate::domain::entities::HolderBook;
use crate::domain::value_objects::AgentId;
use crate::infrastructure::persistence::traits::{
    HolderRepository, RepositoryError, RepositoryResult,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory implementation of [`HolderRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryHolderRepository {
    storage: Arc<RwLock<HashMap<AgentId, HolderBook>>>,
}

impl InMemoryHolderRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository with a book for each fixture agent.
    #[must_use]
    pub fn with_fixtures() -> Self {
        let storage = fixtures::holder_books()
            .into_iter()
            .filter_map(|book| book.agent_id().cloned().map(|id| (id, book)))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }
}

impl HolderRepository for InMemoryHolderRepository {
    fn save(&self, book: HolderBook) -> RepositoryResult<()> {
        let id = book
            .agent_id()
            .cloned()
            .ok_or_else(|| RepositoryError::internal("holder book has no agent"))?;
        self.storage.write().insert(id, book);
        Ok(())
    }

    fn for_agent(&self, agent_id: &AgentId) -> RepositoryResult<HolderBook> {
        let storage = self.storage.read();
        Ok(storage.get(agent_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Outcome;

    #[test]
    fn top_holder_of_first_agent() {
        let repo = InMemoryHolderRepository::with_fixtures();
        let book = repo.for_agent(&AgentId::new("1")).unwrap();
        let top = book.side(Outcome::No).first().map(|h| h.username().to_string());
        assert_eq!(top.as_deref(), Some("kalcik"));
    }

    #[test]
    fn unknown_agent_is_empty() {
        let repo = InMemoryHolderRepository::with_fixtures();
        assert!(repo.for_agent(&AgentId::new("99")).unwrap().is_empty());
    }

    #[test]
    fn rejects_book_without_agent() {
        let repo = InMemoryHolderRepository::new();
        assert!(repo.save(HolderBook::empty()).is_err());
    }
}

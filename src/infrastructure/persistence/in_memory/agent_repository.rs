//! # In-Memory Agent Repository
//!
//! In-memory implementation of [`AgentRepository`].
//!
//! Agents are kept in a `Vec` so board order is the insertion order.

use super::fixtures;
use crate::domain::entities::Agent;
use crate::domain::value_objects::AgentId;
use crate::infrastructure::persistence::traits::{AgentRepository, RepositoryResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory implementation of [`AgentRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentRepository {
    storage: Arc<RwLock<Vec<Agent>>>,
}

impl InMemoryAgentRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the five arena agents.
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self {
            storage: Arc::new(RwLock::new(fixtures::agents())),
        }
    }

    /// Returns the number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all agents.
    pub fn clear(&self) {
        self.storage.write().clear();
    }
}

impl AgentRepository for InMemoryAgentRepository {
    fn save(&self, agent: &Agent) -> RepositoryResult<()> {
        let mut storage = self.storage.write();
        match storage.iter_mut().find(|a| a.id() == agent.id()) {
            Some(slot) => *slot = agent.clone(),
            None => storage.push(agent.clone()),
        }
        Ok(())
    }

    fn get(&self, id: &AgentId) -> RepositoryResult<Option<Agent>> {
        let storage = self.storage.read();
        Ok(storage.iter().find(|a| a.id() == id).cloned())
    }

    fn get_all(&self) -> RepositoryResult<Vec<Agent>> {
        Ok(self.storage.read().clone())
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn fixtures_in_board_order() {
        let repo = InMemoryAgentRepository::with_fixtures();
        let names: Vec<String> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("QuantumTrader AI"));
        assert_eq!(names.last().map(String::as_str), Some("DeepLearning Trader"));
    }

    #[test]
    fn save_replaces_in_place() {
        let repo = InMemoryAgentRepository::with_fixtures();
        let id = AgentId::new("3");
        let updated = Agent::builder(id.clone(), "TrendFollower Alpha")
            .pnl_percent(dec!(5))
            .build();
        repo.save(&updated).unwrap();

        assert_eq!(repo.count().unwrap(), 5);
        let all = repo.get_all().unwrap();
        assert_eq!(all.get(2).map(|a| a.pnl_percent()), Some(dec!(5)));
    }

    #[test]
    fn save_and_clear() {
        let repo = InMemoryAgentRepository::new();
        assert!(repo.is_empty());
        repo.save(&Agent::builder(AgentId::new("x"), "X").build())
            .unwrap();
        assert!(repo.get(&AgentId::new("x")).unwrap().is_some());
        repo.clear();
        assert!(repo.is_empty());
        assert!(repo.get(&AgentId::new("x")).unwrap().is_none());
    }
}

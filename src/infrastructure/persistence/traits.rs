//! # Repository Traits
//!
//! Port definitions for the arena's read models.
//!
//! The arena runs on fixture data, so every repository here is read-mostly
//! and synchronous. Implementations live in
//! [`in_memory`](crate::infrastructure::persistence::in_memory).
//!
//! # Available Repositories
//!
//! - [`AgentRepository`]: Agents in board order
//! - [`HolderRepository`]: Top holders per agent market
//! - [`ActivityRepository`]: Recent trades by other users
//! - [`LeaderboardRepository`]: Weekly and all-time profit tables
//! - [`PortfolioRepository`]: The current user's positions and history
//! - [`ProfileRepository`]: Long-form agent profiles
//!
//! # Examples
//!
//! ```
//! use agent_arena::infrastructure::persistence::in_memory::InMemoryAgentRepository;
//! use agent_arena::infrastructure::persistence::traits::AgentRepository;
//!
//! let repo = InMemoryAgentRepository::with_fixtures();
//! let agents = repo.get_all().unwrap();
//! assert_eq!(agents.len(), 5);
//! ```

use crate::domain::entities::{
    ActivityItem, Agent, AgentProfile, HistoryEntry, HolderBook, LeaderboardEntry, UserPosition,
};
use crate::domain::value_objects::{AgentId, LeaderboardPeriod};
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Agents competing in the arena.
pub trait AgentRepository: Send + Sync {
    /// Inserts or replaces an agent, keeping its board position.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn save(&self, agent: &Agent) -> RepositoryResult<()>;

    /// Looks up an agent by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn get(&self, id: &AgentId) -> RepositoryResult<Option<Agent>>;

    /// All agents in board order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn get_all(&self) -> RepositoryResult<Vec<Agent>>;

    /// Number of agents.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn count(&self) -> RepositoryResult<usize>;
}

/// Top holders per agent market.
pub trait HolderRepository: Send + Sync {
    /// Stores the holder book of the book's agent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Internal` for a book without an agent.
    fn save(&self, book: HolderBook) -> RepositoryResult<()>;

    /// Holders for an agent. Unknown agents yield an empty book.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn for_agent(&self, agent_id: &AgentId) -> RepositoryResult<HolderBook>;
}

/// Recent trades by other users.
pub trait ActivityRepository: Send + Sync {
    /// Records a trade.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if the id is already recorded.
    fn record(&self, item: ActivityItem) -> RepositoryResult<()>;

    /// All trades, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn recent(&self) -> RepositoryResult<Vec<ActivityItem>>;
}

/// Weekly and all-time profit tables.
pub trait LeaderboardRepository: Send + Sync {
    /// Entries of one table, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn entries(&self, period: LeaderboardPeriod) -> RepositoryResult<Vec<LeaderboardEntry>>;

    /// Replaces one table.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn replace(
        &self,
        period: LeaderboardPeriod,
        entries: Vec<LeaderboardEntry>,
    ) -> RepositoryResult<()>;
}

/// The current user's book.
pub trait PortfolioRepository: Send + Sync {
    /// Open and resolved positions.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn positions(&self) -> RepositoryResult<Vec<UserPosition>>;

    /// Trade history, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn history(&self) -> RepositoryResult<Vec<HistoryEntry>>;
}

/// Long-form agent profiles.
pub trait ProfileRepository: Send + Sync {
    /// Stores a profile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn save(&self, profile: AgentProfile) -> RepositoryResult<()>;

    /// Looks up a profile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store is unavailable.
    fn get(&self, agent_id: &AgentId) -> RepositoryResult<Option<AgentProfile>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = RepositoryError::not_found("Agent", "9");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: Agent with id 9");
    }

    #[test]
    fn duplicate_is_not_not_found() {
        assert!(!RepositoryError::duplicate("ActivityItem", "1").is_not_found());
    }
}

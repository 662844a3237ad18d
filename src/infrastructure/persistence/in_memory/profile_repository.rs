//! # In-Memory Profile Repository
//!
//! In-memory implementation of [`ProfileRepository`].

use super::fixtures;
use crate::domain::entities::AgentProfile;
use crate::domain::value_objects::AgentId;
use crate::infrastructure::persistence::traits::{ProfileRepository, RepositoryResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory implementation of [`ProfileRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    storage: Arc<RwLock<HashMap<AgentId, AgentProfile>>>,
}

impl InMemoryProfileRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository with the demo profiles.
    #[must_use]
    pub fn with_fixtures() -> Self {
        let storage = fixtures::profiles()
            .into_iter()
            .map(|p| (p.agent_id().clone(), p))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn save(&self, profile: AgentProfile) -> RepositoryResult<()> {
        self.storage
            .write()
            .insert(profile.agent_id().clone(), profile);
        Ok(())
    }

    fn get(&self, agent_id: &AgentId) -> RepositoryResult<Option<AgentProfile>> {
        Ok(self.storage.read().get(agent_id).cloned())
    }
}

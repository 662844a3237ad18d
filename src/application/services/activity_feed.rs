//! # Activity Feed
//!
//! Recent trades, optionally narrowed to one agent's market.

use crate::application::error::ApplicationResult;
use crate::domain::entities::ActivityItem;
use crate::domain::value_objects::AgentId;
use crate::infrastructure::persistence::ActivityRepository;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Feed filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityFilter {
    /// Every agent.
    #[default]
    All,
    /// A single agent's market.
    Agent(AgentId),
}

impl ActivityFilter {
    /// Returns true if `item` passes the filter.
    #[must_use]
    pub fn matches(&self, item: &ActivityItem) -> bool {
        match self {
            Self::All => true,
            Self::Agent(id) => item.agent_id() == id,
        }
    }
}

impl fmt::Display for ActivityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Agent(id) => write!(f, "Agent {id}"),
        }
    }
}

/// Read-side service for the activity feed.
#[derive(Clone)]
pub struct ActivityFeed {
    repository: Arc<dyn ActivityRepository>,
}

impl fmt::Debug for ActivityFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityFeed").finish_non_exhaustive()
    }
}

impl ActivityFeed {
    /// Creates the feed.
    #[must_use]
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    /// Trades passing `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns a repository error if the feed cannot be read.
    pub fn items(&self, filter: &ActivityFilter) -> ApplicationResult<Vec<ActivityItem>> {
        let items = self.repository.recent()?;
        let matching: Vec<ActivityItem> = items.into_iter().filter(|i| filter.matches(i)).collect();
        tracing::debug!(%filter, count = matching.len(), "activity filtered");
        Ok(matching)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Timestamp;
    use crate::infrastructure::persistence::in_memory::InMemoryActivityRepository;

    fn feed() -> ActivityFeed {
        ActivityFeed::new(Arc::new(InMemoryActivityRepository::with_fixtures(
            Timestamp::now(),
        )))
    }

    #[test]
    fn all_shows_every_trade() {
        assert_eq!(feed().items(&ActivityFilter::All).unwrap().len(), 7);
    }

    #[test]
    fn agent_filter() {
        let items = feed()
            .items(&ActivityFilter::Agent(AgentId::new("1")))
            .unwrap();
        let users: Vec<&str> = items.iter().map(ActivityItem::username).collect();
        assert_eq!(users, vec!["CarTheFarmer", "Briellwukuu"]);
    }

    #[test]
    fn unknown_agent_is_empty() {
        let items = feed()
            .items(&ActivityFilter::Agent(AgentId::new("77")))
            .unwrap();
        assert!(items.is_empty());
    }
}

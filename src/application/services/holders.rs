//! # Top Holders
//!
//! Largest Yes and No holders of an agent's market.

use crate::application::error::ApplicationResult;
use crate::domain::entities::{Holder, HolderBook};
use crate::domain::value_objects::{AgentId, Outcome};
use crate::infrastructure::persistence::HolderRepository;
use std::sync::Arc;

/// Both sides of a holder book, largest first, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HolderColumns {
    /// Yes holders.
    pub yes: Vec<Holder>,
    /// No holders.
    pub no: Vec<Holder>,
}

impl From<&HolderBook> for HolderColumns {
    fn from(book: &HolderBook) -> Self {
        let side = |outcome| book.side(outcome).into_iter().cloned().collect();
        Self {
            yes: side(Outcome::Yes),
            no: side(Outcome::No),
        }
    }
}

/// Read-side service for holder books.
#[derive(Clone)]
pub struct HoldersService {
    repository: Arc<dyn HolderRepository>,
}

impl std::fmt::Debug for HoldersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoldersService").finish_non_exhaustive()
    }
}

impl HoldersService {
    /// Creates the service.
    #[must_use]
    pub fn new(repository: Arc<dyn HolderRepository>) -> Self {
        Self { repository }
    }

    /// Holders of `agent_id`'s market. Unknown agents have none.
    ///
    /// # Errors
    ///
    /// Returns a repository error if the book cannot be read.
    pub fn for_agent(&self, agent_id: &AgentId) -> ApplicationResult<HolderColumns> {
        let book = self.repository.for_agent(agent_id)?;
        Ok(HolderColumns::from(&book))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::services::avatar::AvatarColor;
    use crate::infrastructure::persistence::in_memory::InMemoryHolderRepository;

    fn service() -> HoldersService {
        HoldersService::new(Arc::new(InMemoryHolderRepository::with_fixtures()))
    }

    #[test]
    fn columns_for_second_agent() {
        let columns = service().for_agent(&AgentId::new("2")).unwrap();
        assert_eq!(columns.yes.len(), 5);
        let top_no = columns.no.first().unwrap();
        assert_eq!(top_no.username(), "BearMarket");
        assert_eq!(top_no.shares_label(), "45,200");
        assert_eq!(top_no.avatar_label(), "BE");
        assert_eq!(top_no.avatar_color(), AvatarColor::Green);
    }

    #[test]
    fn unknown_agent_has_empty_columns() {
        let columns = service().for_agent(&AgentId::new("0")).unwrap();
        assert_eq!(columns, HolderColumns::default());
    }
}

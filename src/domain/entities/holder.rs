//! # Holders
//!
//! Top share holders on each side of an agent's market.

use crate::domain::services::avatar::{AvatarColor, avatar_label};
use crate::domain::value_objects::usd::group_thousands;
use crate::domain::value_objects::{AgentId, Outcome};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user holding shares of one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holder {
    id: String,
    username: String,
    shares: u64,
}

impl Holder {
    /// Creates a holder.
    #[must_use]
    pub fn new(id: impl Into<String>, username: impl Into<String>, shares: u64) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            shares,
        }
    }

    /// Returns the holder id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the username.
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the share count.
    #[inline]
    #[must_use]
    pub const fn shares(&self) -> u64 {
        self.shares
    }

    /// Share count with thousands separators.
    #[must_use]
    pub fn shares_label(&self) -> String {
        group_thousands(Decimal::from(self.shares), 0)
    }

    /// Fallback avatar colour.
    #[must_use]
    pub fn avatar_color(&self) -> AvatarColor {
        AvatarColor::for_username(&self.username)
    }

    /// Fallback avatar label.
    #[must_use]
    pub fn avatar_label(&self) -> String {
        avatar_label(&self.username)
    }
}

/// Yes and No holders of one agent's market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HolderBook {
    agent_id: Option<AgentId>,
    yes: Vec<Holder>,
    no: Vec<Holder>,
}

impl HolderBook {
    /// Creates a book for `agent_id`.
    #[must_use]
    pub fn new(agent_id: AgentId, yes: Vec<Holder>, no: Vec<Holder>) -> Self {
        Self {
            agent_id: Some(agent_id),
            yes,
            no,
        }
    }

    /// An empty book, used for agents without holder data.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the agent, if the book belongs to one.
    #[must_use]
    pub fn agent_id(&self) -> Option<&AgentId> {
        self.agent_id.as_ref()
    }

    /// Holders of one side, largest first.
    #[must_use]
    pub fn side(&self, outcome: Outcome) -> Vec<&Holder> {
        let holders = match outcome {
            Outcome::Yes => &self.yes,
            Outcome::No => &self.no,
        };
        let mut sorted: Vec<&Holder> = holders.iter().collect();
        sorted.sort_by(|a, b| b.shares.cmp(&a.shares));
        sorted
    }

    /// Total shares held on one side, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_shares(&self, outcome: Outcome) -> u64 {
        self.side(outcome)
            .iter()
            .fold(0u64, |acc, h| acc.saturating_add(h.shares))
    }

    /// Returns true if neither side has holders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.yes.is_empty() && self.no.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> HolderBook {
        HolderBook::new(
            AgentId::new("1"),
            vec![
                Holder::new("2", "Randomfool", 21_739),
                Holder::new("1", "Bombarda", 22_860),
            ],
            vec![Holder::new("6", "kalcik", 66_886)],
        )
    }

    #[test]
    fn side_is_sorted_by_shares() {
        let book = book();
        let yes = book.side(Outcome::Yes);
        let names: Vec<&str> = yes.iter().map(|h| h.username()).collect();
        assert_eq!(names, vec!["Bombarda", "Randomfool"]);
    }

    #[test]
    fn totals_per_side() {
        let book = book();
        assert_eq!(book.total_shares(Outcome::Yes), 44_599);
        assert_eq!(book.total_shares(Outcome::No), 66_886);
    }

    #[test]
    fn shares_label_groups_thousands() {
        assert_eq!(Holder::new("6", "kalcik", 66_886).shares_label(), "66,886");
    }

    #[test]
    fn empty_book() {
        let book = HolderBook::empty();
        assert!(book.is_empty());
        assert!(book.agent_id().is_none());
        assert!(book.side(Outcome::No).is_empty());
    }
}

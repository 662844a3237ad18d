//! # Identifiers
//!
//! Strongly-typed identifiers.
//!
//! - [`AgentId`]: string id of an arena agent (fixture ids are `"1"`..`"5"`)
//! - [`TradeIntentId`]: UUID of a submitted (but never executed) trade

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of an arena agent.
///
/// # Examples
///
/// ```
/// use agent_arena::domain::value_objects::AgentId;
///
/// let id = AgentId::new("1");
/// assert_eq!(id.as_str(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates an agent id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a trade intent produced by the trade ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeIntentId(Uuid);

impl TradeIntentId {
    /// Generates a random id.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn get(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TradeIntentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_id_display_is_raw() {
        assert_eq!(AgentId::from("3").to_string(), "3");
    }

    #[test]
    fn trade_intent_ids_are_unique() {
        assert_ne!(TradeIntentId::new_v4(), TradeIntentId::new_v4());
    }
}

//! # Activity
//!
//! Recent trades by other users, shown in the market's activity feed.

use crate::domain::services::avatar::{AvatarColor, avatar_label};
use crate::domain::value_objects::usd::fixed;
use crate::domain::value_objects::{AgentId, Outcome, Timestamp, TradeMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trade in the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    id: String,
    username: String,
    action: TradeMode,
    shares: u64,
    outcome: Outcome,
    agent_id: AgentId,
    agent_name: String,
    /// Price in cents, kept unclamped as recorded.
    price: Decimal,
    value: Decimal,
    at: Timestamp,
}

impl ActivityItem {
    /// Creates an activity item.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        action: TradeMode,
        shares: u64,
        outcome: Outcome,
        agent_id: AgentId,
        agent_name: impl Into<String>,
        price: Decimal,
        value: Decimal,
        at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            action,
            shares,
            outcome,
            agent_id,
            agent_name: agent_name.into(),
            price,
            value,
            at,
        }
    }

    /// Returns the item id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the trader's username.
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns whether the user bought or sold.
    #[inline]
    #[must_use]
    pub const fn action(&self) -> TradeMode {
        self.action
    }

    /// Returns the share count.
    #[inline]
    #[must_use]
    pub const fn shares(&self) -> u64 {
        self.shares
    }

    /// Returns the traded side.
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the agent whose market was traded.
    #[inline]
    #[must_use]
    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Returns the agent's display name.
    #[inline]
    #[must_use]
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    /// Returns the trade time.
    #[inline]
    #[must_use]
    pub const fn at(&self) -> Timestamp {
        self.at
    }

    /// Sentence describing the trade:
    /// `CarTheFarmer sold 97 No for QuantumTrader AI at 99.7¢ ($97)`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} {} for {} at {}¢ (${})",
            self.username,
            self.action.past_tense(),
            self.shares,
            self.outcome,
            self.agent_name,
            self.price.normalize(),
            fixed(self.value, 0),
        )
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn describe_matches_feed_wording() {
        let now = Timestamp::parse_history("2024-01-30 14:30:25").unwrap();
        let item = ActivityItem::new(
            "1",
            "CarTheFarmer",
            TradeMode::Sell,
            97,
            Outcome::No,
            AgentId::new("1"),
            "QuantumTrader AI",
            dec!(99.7),
            dec!(97),
            now.sub_mins(7),
        );
        assert_eq!(
            item.describe(),
            "CarTheFarmer sold 97 No for QuantumTrader AI at 99.7¢ ($97)"
        );
        assert_eq!(item.at().age_label(&now), "7m ago");
        assert_eq!(item.avatar_label(), "CA");
    }
}

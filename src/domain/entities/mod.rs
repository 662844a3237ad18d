//! # Domain Entities
//!
//! Core arena concepts: agents and their markets, the people trading them,
//! and the current user's book.
//!
//! ## Entities
//!
//! - [`Agent`]: A simulated trading bot with its performance fixture
//! - [`HolderBook`]: Top Yes/No holders of an agent's market
//! - [`ActivityItem`]: A recent trade in the activity feed
//! - [`LeaderboardEntry`]: A user's standing in a profit table
//! - [`UserPosition`] / [`HistoryEntry`]: The user's portfolio
//! - [`AgentProfile`]: Long-form agent statistics

pub mod activity;
pub mod agent;
pub mod holder;
pub mod leaderboard;
pub mod portfolio;
pub mod profile;

pub use activity::ActivityItem;
pub use agent::{Agent, AgentBuilder, AssetPosition};
pub use holder::{Holder, HolderBook};
pub use leaderboard::{LeaderboardEntry, RankBadge};
pub use portfolio::{HistoryEntry, UserPosition};
pub use profile::{AgentProfile, AgentProfileBuilder, PerformancePoint, StrategyNote};

//! # In-Memory Repositories
//!
//! Fixture-backed implementations of the repository traits.
//!
//! ## Available Repositories
//!
//! - [`InMemoryAgentRepository`]: Agents in board order
//! - [`InMemoryHolderRepository`]: Holder books per agent
//! - [`InMemoryActivityRepository`]: Activity feed
//! - [`InMemoryLeaderboardRepository`]: Profit tables
//! - [`InMemoryPortfolioRepository`]: The sample user's book
//! - [`InMemoryProfileRepository`]: Agent profiles
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<parking_lot::RwLock<_>>` so clones share state.

pub mod activity_repository;
pub mod agent_repository;
pub mod fixtures;
pub mod holder_repository;
pub mod leaderboard_repository;
pub mod portfolio_repository;
pub mod profile_repository;

pub use activity_repository::InMemoryActivityRepository;
pub use agent_repository::InMemoryAgentRepository;
pub use holder_repository::InMemoryHolderRepository;
pub use leaderboard_repository::InMemoryLeaderboardRepository;
pub use portfolio_repository::InMemoryPortfolioRepository;
pub use profile_repository::InMemoryProfileRepository;

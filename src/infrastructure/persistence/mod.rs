//! # Persistence Layer
//!
//! Repository ports and their fixture-backed implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`AgentRepository`], [`HolderRepository`], [`ActivityRepository`]
//! - [`LeaderboardRepository`], [`PortfolioRepository`], [`ProfileRepository`]
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementations seeded from fixtures

pub mod in_memory;
pub mod traits;

pub use traits::{
    ActivityRepository, AgentRepository, HolderRepository, LeaderboardRepository,
    PortfolioRepository, ProfileRepository, RepositoryError, RepositoryResult,
};

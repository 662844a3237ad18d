//! # Application Services
//!
//! View-state and read-side services over the domain and the fixture
//! repositories.
//!
//! - [`MarketController`]: The arena page and its trade ticket
//! - [`TradeTicket`]: Buy/sell panel state and previews
//! - [`LeaderboardService`]: Profit and volume leaders
//! - [`PortfolioService`]: The user's book and its summary
//! - [`ActivityFeed`] / [`HoldersService`]: Market activity and holders
//! - [`ChartGenerator`]: Synthetic chart series
//! - [`ProfileView`]: Agent profile page state

pub mod activity_feed;
pub mod chart_data;
pub mod holders;
pub mod leaderboard;
pub mod market_controller;
pub mod portfolio;
pub mod profile_view;
pub mod trade_ticket;

pub use activity_feed::{ActivityFeed, ActivityFilter};
pub use chart_data::{ChancePoint, ChartGenerator, PricePoint, PriceStats};
pub use holders::{HolderColumns, HoldersService};
pub use leaderboard::{LeaderboardService, VolumeLeader};
pub use market_controller::{BoardRow, FeedTab, MarketController};
pub use portfolio::{PortfolioService, PortfolioSummary};
pub use profile_view::{ProfileTab, ProfileView, TradesTab};
pub use trade_ticket::{
    PanelLayout, PreviewState, QuickAction, TradeIntent, TradePreview, TradeTicket, parse_stake,
};

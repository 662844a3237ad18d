//! # Agent Arena
//!
//! A mock prediction market where users bet Yes or No on simulated trading
//! agents finishing a session with the highest P&L.
//!
//! Each agent's market is priced by a linear quote model:
//!
//! ```text
//! yes = clamp(50 + pnl_percent * 10, 10, 90)
//! no  = 100 - yes
//! ```
//!
//! and a stake's potential payout is either the net win on a buy or the
//! proceeds of a sale.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ application   MarketController, TradeTicket,  │
//! │               leaderboard/portfolio/feeds     │
//! ├──────────────────────────────────────────────┤
//! │ domain        QuoteModel, entities, values    │
//! ├──────────────────────────────────────────────┤
//! │ infrastructure  in-memory fixture repositories│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use agent_arena::domain::services::quote_model::{potential_payout, yes_price};
//! use agent_arena::domain::value_objects::PayoutFraming;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(yes_price(Decimal::ZERO).get(), Decimal::from(50));
//!
//! let win = potential_payout(Decimal::from(100), Decimal::from(50), PayoutFraming::ToWin);
//! assert_eq!(win, Ok(Decimal::from(100)));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::{ApplicationError, ApplicationResult};
pub use config::AppConfig;
pub use domain::services::quote_model::{Quote, QuoteModel, QuoteModelConfig};

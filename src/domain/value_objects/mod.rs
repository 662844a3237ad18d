//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`AgentId`]: String-based agent identifier
//! - [`TradeIntentId`]: UUID of a submitted trade intent
//!
//! ## Numeric Types
//!
//! - [`Cents`]: Share price within `[0, 100]`
//! - [`Usd`]: Dollar amount with display helpers
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//!
//! ## Domain Enums
//!
//! - `Outcome`: Yes or No
//! - `TradeMode`: Buy or Sell
//! - `PayoutFraming`: To win or receive

pub mod arithmetic;
pub mod cents;
pub mod enums;
pub mod ids;
pub mod timestamp;
pub mod usd;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use cents::Cents;
pub use enums::{
    AgentStatus, Asset, LeaderboardPeriod, Outcome, ParseEnumError, PayoutFraming, PerformancePeriod,
    PositionStatus, TradeMode,
};
pub use ids::{AgentId, TradeIntentId};
pub use timestamp::Timestamp;
pub use usd::Usd;

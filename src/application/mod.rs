//! # Application Layer
//!
//! Use cases that drive the arena views: the market controller, the trade
//! ticket and the read-side services.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};

//! # Domain Services
//!
//! Stateless domain logic that doesn't belong to a single entity.
//!
//! ## Services
//!
//! - [`quote_model::QuoteModel`]: Yes/No pricing and potential payouts
//! - [`avatar`]: Fallback avatar colours and labels

pub mod avatar;
pub mod quote_model;

pub use avatar::AvatarColor;
pub use quote_model::{Quote, QuoteModel, QuoteModelConfig, no_price, potential_payout, yes_price};

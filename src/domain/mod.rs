//! # Domain Layer
//!
//! Pure business logic with no I/O: value objects, entities, the quote
//! model and domain errors.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};

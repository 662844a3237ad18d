//! # Infrastructure Layer
//!
//! Adapters behind the application's ports. The arena only needs
//! persistence, backed by in-memory fixtures.

pub mod persistence;

//! Database models for the Production Management Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;

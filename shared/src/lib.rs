//! Shared types and models for the Production Management Platform
//!
//! This crate contains the domain models, the derived-quantity calculator and
//! validation helpers shared between the backend and its test suites. It holds
//! no IO: everything here is deterministic and safe to call repeatedly.

pub mod calc;
pub mod models;
pub mod types;
pub mod validation;

pub use calc::*;
pub use models::*;
pub use types::*;
pub use validation::*;

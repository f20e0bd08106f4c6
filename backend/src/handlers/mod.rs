//! HTTP request handlers

pub mod auth;
pub mod consumption;
pub mod health;
pub mod manufacturing;
pub mod materials;
pub mod reporting;
pub mod shipments;
pub mod stock;
pub mod users;

pub use auth::*;
pub use consumption::*;
pub use health::*;
pub use manufacturing::*;
pub use materials::*;
pub use reporting::*;
pub use shipments::*;
pub use stock::*;
pub use users::*;

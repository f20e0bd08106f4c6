//! Domain models for the Production Management Platform

mod consumption;
mod entry;
mod manufacturing;
mod material;
mod shipment;
mod stock;
mod user;

pub use consumption::*;
pub use entry::*;
pub use manufacturing::*;
pub use material::*;
pub use shipment::*;
pub use stock::*;
pub use user::*;

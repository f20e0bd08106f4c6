//! Business logic services

pub mod auth;
pub mod consumption;
pub mod ledger;
pub mod manufacturing;
pub mod materials;
pub mod reporting;
pub mod sequence;
pub mod shipments;

pub use auth::AuthService;
pub use consumption::ConsumptionService;
pub use ledger::LedgerService;
pub use manufacturing::ManufacturingService;
pub use materials::MaterialService;
pub use reporting::ReportingService;
pub use shipments::ShipmentService;

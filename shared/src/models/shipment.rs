//! Shipment model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An outbound shipment of finished goods
///
/// `shipment_number` is issued by the sequence generator ("SEV-00042") and
/// `square_meters` is computed from the dimensions. Recording a shipment
/// atomically decrements the finished-goods bucket matching the dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Shipment {
    pub id: Uuid,
    pub shipment_number: String,
    pub shipment_date: DateTime<Utc>,
    pub customer_company: String,
    pub thickness_mm: Decimal,
    pub width_cm: Decimal,
    pub length_m: Decimal,
    pub quantity: i64,
    pub square_meters: Decimal,
    pub invoice_number: Option<String>,
    pub vehicle_plate: Option<String>,
    pub driver_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

//! Manufacturing record model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A production run on one machine
///
/// `square_meters` and `model` are server-computed. Recording a run
/// atomically consumes masura and gas stock and adds the produced sheets to
/// the finished-goods bucket matching the dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ManufacturingRecord {
    pub id: Uuid,
    pub production_date: DateTime<Utc>,
    pub machine: String,
    pub thickness_mm: Decimal,
    pub width_cm: Decimal,
    pub length_m: Decimal,
    pub quantity: i64,
    pub masura_type: String,
    pub masura_quantity: Decimal,
    pub gas_consumption_kg: Decimal,
    pub square_meters: Decimal,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

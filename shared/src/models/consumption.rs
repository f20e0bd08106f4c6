//! Daily and gas consumption models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A day's raw-material consumption on one machine
///
/// `total_petkim`, `estol_quantity` and `talk_quantity` are derived fields;
/// callers supply only petkim and fire quantities. Recording a consumption
/// atomically decrements Petkim, Estol and Talk stock.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyConsumption {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub machine: String,
    pub petkim_quantity: Decimal,
    pub fire_quantity: Decimal,
    pub total_petkim: Decimal,
    pub estol_quantity: Decimal,
    pub talk_quantity: Decimal,
    pub created_at: DateTime<Utc>,
}

/// A day's gas usage, decremented from the gas material's stock
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GasConsumption {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub total_gas_kg: Decimal,
    pub created_at: DateTime<Utc>,
}

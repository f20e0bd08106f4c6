//! Finished-goods stock and ledger history models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Balance of one finished-goods bucket, keyed by normalized dimensions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FinishedGoodsStock {
    pub thickness_mm: Decimal,
    pub width_cm: Decimal,
    pub length_m: Decimal,
    pub total_quantity: i64,
    pub total_square_meters: Decimal,
}

/// One row of ledger history: a single stock mutation and the record that
/// caused it. Material movements carry `material_id`; finished-goods
/// movements carry the bucket dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockMovement {
    pub id: Uuid,
    pub material_id: Option<Uuid>,
    pub thickness_mm: Option<Decimal>,
    pub width_cm: Option<Decimal>,
    pub length_m: Option<Decimal>,
    pub direction: String,
    pub quantity: Decimal,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub created_at: DateTime<Utc>,
}

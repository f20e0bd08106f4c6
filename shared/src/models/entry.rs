//! Material entry (inbound stock) model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An inbound delivery of a raw material
///
/// Recording an entry atomically increments the referenced material's
/// current stock by `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaterialEntry {
    pub id: Uuid,
    pub entry_date: DateTime<Utc>,
    pub material_id: Uuid,
    pub quantity: Decimal,
    pub currency: String,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub supplier: Option<String>,
    pub invoice_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

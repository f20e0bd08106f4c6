//! Raw material model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A raw material tracked by the stock ledger
///
/// `current_stock` is the ledger-owned running balance; only the ledger
/// mutates it, everything else reads it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RawMaterial {
    pub id: Uuid,
    pub name: String,
    /// Unique immutable code, e.g. "PTK001"
    pub code: String,
    /// Unit of measure, e.g. "kg" or "adet"
    pub unit: String,
    pub unit_price: Decimal,
    pub min_stock_level: Decimal,
    pub current_stock: Decimal,
    pub created_at: DateTime<Utc>,
}

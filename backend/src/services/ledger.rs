//! Stock ledger
//!
//! The single owner of every stock balance: raw-material `current_stock` and
//! the finished-goods buckets. All mutations go through the primitives in this
//! module, inside the caller's transaction, so a multi-material operation
//! either lands completely or not at all. Every mutation appends a row to
//! `stock_movements`, the ledger history.

use rust_decimal::Decimal;
use shared::calc::{normalize_dimension, square_meters};
use shared::models::{FinishedGoodsStock, StockMovement};
use shared::types::MovementDirection;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Transaction alias used by all ledger primitives
pub type PgTx<'a> = Transaction<'a, Postgres>;

/// Well-known material names resolved by consumption operations
pub const PETKIM: &str = "Petkim";
pub const ESTOL: &str = "Estol";
pub const TALK: &str = "Talk";
pub const GAS: &str = "Gaz";

#[derive(Debug, sqlx::FromRow)]
struct MaterialStockRow {
    id: Uuid,
    name: String,
    current_stock: Decimal,
}

/// Increase a material's stock; returns the updated balance.
/// Fails with NotFound if the material does not exist.
pub async fn increase_material_stock(
    tx: &mut PgTx<'_>,
    material_id: Uuid,
    quantity: Decimal,
    reference_type: &str,
    reference_id: Uuid,
) -> AppResult<Decimal> {
    let balance = sqlx::query_scalar::<_, Decimal>(
        "UPDATE raw_materials SET current_stock = current_stock + $2 WHERE id = $1 RETURNING current_stock",
    )
    .bind(material_id)
    .bind(quantity)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| AppError::NotFound("Material".to_string()))?;

    record_material_movement(
        tx,
        material_id,
        MovementDirection::In,
        quantity,
        reference_type,
        reference_id,
    )
    .await?;

    Ok(balance)
}

/// Decrease a material's stock, addressed by name (consumption operations
/// resolve Petkim/Estol/Talk/Gaz and masura types by name).
pub async fn decrease_material_stock_by_name(
    tx: &mut PgTx<'_>,
    name: &str,
    quantity: Decimal,
    reference_type: &str,
    reference_id: Uuid,
) -> AppResult<Decimal> {
    let row = sqlx::query_as::<_, MaterialStockRow>(
        "SELECT id, name, current_stock FROM raw_materials WHERE name = $1 FOR UPDATE",
    )
    .bind(name)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Material '{}'", name)))?;

    apply_material_decrease(tx, row, quantity, reference_type, reference_id).await
}

/// Shared decrement path; the row is already locked with FOR UPDATE so
/// concurrent mutations on the same material are serialized.
async fn apply_material_decrease(
    tx: &mut PgTx<'_>,
    row: MaterialStockRow,
    quantity: Decimal,
    reference_type: &str,
    reference_id: Uuid,
) -> AppResult<Decimal> {
    if row.current_stock < quantity {
        return Err(AppError::InsufficientStock {
            message: format!(
                "Insufficient stock for {}: {} available, {} required",
                row.name, row.current_stock, quantity
            ),
            message_tr: format!(
                "{} stoğu yetersiz: {} mevcut, {} gerekli",
                row.name, row.current_stock, quantity
            ),
        });
    }

    let balance = sqlx::query_scalar::<_, Decimal>(
        "UPDATE raw_materials SET current_stock = current_stock - $2 WHERE id = $1 RETURNING current_stock",
    )
    .bind(row.id)
    .bind(quantity)
    .fetch_one(&mut **tx)
    .await?;

    record_material_movement(
        tx,
        row.id,
        MovementDirection::Out,
        quantity,
        reference_type,
        reference_id,
    )
    .await?;

    Ok(balance)
}

/// Add manufactured sheets to the finished-goods bucket matching the
/// dimensions, creating the bucket on first use. The credited area is
/// derived from the normalized key, not the caller's raw dimensions, so the
/// matching debit removes exactly what was credited.
pub async fn increase_finished_goods(
    tx: &mut PgTx<'_>,
    thickness_mm: Decimal,
    width_cm: Decimal,
    length_m: Decimal,
    quantity: i64,
    reference_type: &str,
    reference_id: Uuid,
) -> AppResult<()> {
    let (thickness_mm, width_cm, length_m) = normalize_bucket(thickness_mm, width_cm, length_m);
    let area = square_meters(width_cm, length_m, quantity);

    sqlx::query(
        r#"
        INSERT INTO finished_goods_stock (thickness_mm, width_cm, length_m, total_quantity, total_square_meters)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (thickness_mm, width_cm, length_m) DO UPDATE
        SET total_quantity = finished_goods_stock.total_quantity + EXCLUDED.total_quantity,
            total_square_meters = finished_goods_stock.total_square_meters + EXCLUDED.total_square_meters
        "#,
    )
    .bind(thickness_mm)
    .bind(width_cm)
    .bind(length_m)
    .bind(quantity)
    .bind(area)
    .execute(&mut **tx)
    .await?;

    record_bucket_movement(
        tx, thickness_mm, width_cm, length_m, MovementDirection::In,
        Decimal::from(quantity), reference_type, reference_id,
    )
    .await
}

/// Remove shipped sheets from the finished-goods bucket matching the
/// dimensions. Fails with InsufficientStock if the bucket is missing or the
/// balance would go negative. The debited area is derived from the
/// normalized key like the credit side; emptying the bucket zeroes the area
/// outright so per-operation rounding can never leave it negative.
pub async fn decrease_finished_goods(
    tx: &mut PgTx<'_>,
    thickness_mm: Decimal,
    width_cm: Decimal,
    length_m: Decimal,
    quantity: i64,
    reference_type: &str,
    reference_id: Uuid,
) -> AppResult<()> {
    let (thickness_mm, width_cm, length_m) = normalize_bucket(thickness_mm, width_cm, length_m);
    let area = square_meters(width_cm, length_m, quantity);

    let updated = sqlx::query(
        r#"
        UPDATE finished_goods_stock
        SET total_quantity = total_quantity - $4,
            total_square_meters = CASE
                WHEN total_quantity = $4 THEN 0
                ELSE GREATEST(total_square_meters - $5, 0)
            END
        WHERE thickness_mm = $1 AND width_cm = $2 AND length_m = $3
          AND total_quantity >= $4
        "#,
    )
    .bind(thickness_mm)
    .bind(width_cm)
    .bind(length_m)
    .bind(quantity)
    .bind(area)
    .execute(&mut **tx)
    .await?;

    if updated.rows_affected() == 0 {
        return Err(AppError::InsufficientStock {
            message: format!(
                "Insufficient finished-goods stock for {}mm x {}cm x {}m",
                thickness_mm, width_cm, length_m
            ),
            message_tr: format!(
                "{}mm x {}cm x {}m için mamul stoğu yetersiz",
                thickness_mm, width_cm, length_m
            ),
        });
    }

    record_bucket_movement(
        tx, thickness_mm, width_cm, length_m, MovementDirection::Out,
        Decimal::from(quantity), reference_type, reference_id,
    )
    .await
}

fn normalize_bucket(
    thickness_mm: Decimal,
    width_cm: Decimal,
    length_m: Decimal,
) -> (Decimal, Decimal, Decimal) {
    (
        normalize_dimension(thickness_mm),
        normalize_dimension(width_cm),
        normalize_dimension(length_m),
    )
}

async fn record_material_movement(
    tx: &mut PgTx<'_>,
    material_id: Uuid,
    direction: MovementDirection,
    quantity: Decimal,
    reference_type: &str,
    reference_id: Uuid,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO stock_movements (material_id, direction, quantity, reference_type, reference_id)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(material_id)
    .bind(direction.as_str())
    .bind(quantity)
    .bind(reference_type)
    .bind(reference_id)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn record_bucket_movement(
    tx: &mut PgTx<'_>,
    thickness_mm: Decimal,
    width_cm: Decimal,
    length_m: Decimal,
    direction: MovementDirection,
    quantity: Decimal,
    reference_type: &str,
    reference_id: Uuid,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO stock_movements (thickness_mm, width_cm, length_m, direction, quantity, reference_type, reference_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(thickness_mm)
    .bind(width_cm)
    .bind(length_m)
    .bind(direction.as_str())
    .bind(quantity)
    .bind(reference_type)
    .bind(reference_id)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Read side of the ledger: snapshot and history
#[derive(Clone)]
pub struct LedgerService {
    db: PgPool,
}

impl LedgerService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Current finished-goods balances per bucket. A single statement, so the
    /// result is a consistent snapshot of committed state.
    pub async fn get_stock_snapshot(&self) -> AppResult<Vec<FinishedGoodsStock>> {
        let stock = sqlx::query_as::<_, FinishedGoodsStock>(
            r#"
            SELECT thickness_mm, width_cm, length_m, total_quantity, total_square_meters
            FROM finished_goods_stock
            WHERE total_quantity > 0
            ORDER BY thickness_mm, width_cm, length_m
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(stock)
    }

    /// Ledger history, newest first
    pub async fn list_movements(&self) -> AppResult<Vec<StockMovement>> {
        let movements = sqlx::query_as::<_, StockMovement>(
            r#"
            SELECT id, material_id, thickness_mm, width_cm, length_m, direction,
                   quantity, reference_type, reference_id, created_at
            FROM stock_movements
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(movements)
    }
}

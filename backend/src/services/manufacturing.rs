//! Manufacturing service
//!
//! Records production runs: consumes masura and gas stock, credits the
//! finished-goods bucket matching the produced dimensions, and computes the
//! derived square meters and model label.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::services::ledger::{self, GAS};
use shared::calc::{product_model, square_meters};
use shared::models::ManufacturingRecord;
use shared::validation::{validate_non_negative, validate_positive};

/// Manufacturing service
#[derive(Clone)]
pub struct ManufacturingService {
    db: PgPool,
}

/// Input for recording a production run
#[derive(Debug, Deserialize)]
pub struct RecordManufacturingInput {
    pub production_date: Option<DateTime<Utc>>,
    pub machine: String,
    pub thickness_mm: Decimal,
    pub width_cm: Decimal,
    pub length_m: Decimal,
    pub quantity: i64,
    pub masura_type: String,
    pub masura_quantity: Decimal,
    pub gas_consumption_kg: Decimal,
}

impl ManufacturingService {
    /// Create a new ManufacturingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a production run as one atomic transaction: raw materials out,
    /// finished goods in, nothing applies on failure.
    pub async fn record(&self, input: RecordManufacturingInput) -> AppResult<ManufacturingRecord> {
        if input.quantity <= 0 {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity must be positive".to_string(),
                message_tr: "Miktar pozitif olmalı".to_string(),
            });
        }
        for (field, value) in [
            ("thickness_mm", input.thickness_mm),
            ("width_cm", input.width_cm),
            ("length_m", input.length_m),
        ] {
            validate_positive(value).map_err(|msg| AppError::Validation {
                field: field.to_string(),
                message: msg.to_string(),
                message_tr: "Ölçü pozitif olmalı".to_string(),
            })?;
        }
        validate_non_negative(input.masura_quantity).map_err(|msg| AppError::Validation {
            field: "masura_quantity".to_string(),
            message: msg.to_string(),
            message_tr: "Masura miktarı negatif olamaz".to_string(),
        })?;
        validate_non_negative(input.gas_consumption_kg).map_err(|msg| AppError::Validation {
            field: "gas_consumption_kg".to_string(),
            message: msg.to_string(),
            message_tr: "Gaz tüketimi negatif olamaz".to_string(),
        })?;

        let production_date = input.production_date.unwrap_or_else(Utc::now);
        let sqm = square_meters(input.width_cm, input.length_m, input.quantity);
        let model = product_model(input.thickness_mm, input.width_cm, input.length_m);

        let mut tx = self.db.begin().await?;

        let record = sqlx::query_as::<_, ManufacturingRecord>(
            r#"
            INSERT INTO manufacturing_records (
                production_date, machine, thickness_mm, width_cm, length_m,
                quantity, masura_type, masura_quantity, gas_consumption_kg,
                square_meters, model
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, production_date, machine, thickness_mm, width_cm, length_m,
                      quantity, masura_type, masura_quantity, gas_consumption_kg,
                      square_meters, model, created_at
            "#,
        )
        .bind(production_date)
        .bind(&input.machine)
        .bind(input.thickness_mm)
        .bind(input.width_cm)
        .bind(input.length_m)
        .bind(input.quantity)
        .bind(&input.masura_type)
        .bind(input.masura_quantity)
        .bind(input.gas_consumption_kg)
        .bind(sqm)
        .bind(&model)
        .fetch_one(&mut *tx)
        .await?;

        // Raw materials out
        if input.masura_quantity > Decimal::ZERO {
            ledger::decrease_material_stock_by_name(
                &mut tx,
                &input.masura_type,
                input.masura_quantity,
                "manufacturing",
                record.id,
            )
            .await?;
        }
        if input.gas_consumption_kg > Decimal::ZERO {
            ledger::decrease_material_stock_by_name(
                &mut tx,
                GAS,
                input.gas_consumption_kg,
                "manufacturing",
                record.id,
            )
            .await?;
        }

        // Finished goods in
        ledger::increase_finished_goods(
            &mut tx,
            input.thickness_mm,
            input.width_cm,
            input.length_m,
            input.quantity,
            "manufacturing",
            record.id,
        )
        .await?;

        tx.commit().await?;

        Ok(record)
    }

    /// List all manufacturing records, newest first
    pub async fn list(&self) -> AppResult<Vec<ManufacturingRecord>> {
        let records = sqlx::query_as::<_, ManufacturingRecord>(
            r#"
            SELECT id, production_date, machine, thickness_mm, width_cm, length_m,
                   quantity, masura_type, masura_quantity, gas_consumption_kg,
                   square_meters, model, created_at
            FROM manufacturing_records
            ORDER BY production_date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }
}

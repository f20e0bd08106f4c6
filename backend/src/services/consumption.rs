//! Consumption service
//!
//! Records daily petkim consumption (with derived estol/talk quantities) and
//! standalone gas consumption. Each record debits the corresponding raw
//! materials in a single transaction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::services::ledger::{self, ESTOL, GAS, PETKIM, TALK};
use shared::calc::consumption_totals;
use shared::models::{DailyConsumption, GasConsumption};
use shared::validation::{validate_non_negative, validate_positive};

/// Consumption service
#[derive(Clone)]
pub struct ConsumptionService {
    db: PgPool,
}

/// Input for recording a day's consumption on one machine.
/// Derived fields in the request body are ignored; the server recomputes them.
#[derive(Debug, Deserialize)]
pub struct RecordConsumptionInput {
    pub date: Option<DateTime<Utc>>,
    pub machine: String,
    pub petkim_quantity: Decimal,
    pub fire_quantity: Option<Decimal>,
}

/// Input for recording a day's gas usage
#[derive(Debug, Deserialize)]
pub struct RecordGasInput {
    pub date: Option<DateTime<Utc>>,
    pub total_gas_kg: Decimal,
}

impl ConsumptionService {
    /// Create a new ConsumptionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a daily consumption: derives total/estol/talk quantities and
    /// debits the Petkim, Estol and Talk materials as one atomic group.
    pub async fn record_daily(
        &self,
        input: RecordConsumptionInput,
    ) -> AppResult<DailyConsumption> {
        validate_positive(input.petkim_quantity).map_err(|msg| AppError::Validation {
            field: "petkim_quantity".to_string(),
            message: msg.to_string(),
            message_tr: "Petkim miktarı pozitif olmalı".to_string(),
        })?;
        let fire_quantity = input.fire_quantity.unwrap_or(Decimal::ZERO);
        validate_non_negative(fire_quantity).map_err(|msg| AppError::Validation {
            field: "fire_quantity".to_string(),
            message: msg.to_string(),
            message_tr: "Fire miktarı negatif olamaz".to_string(),
        })?;

        let date = input.date.unwrap_or_else(Utc::now);
        let totals = consumption_totals(input.petkim_quantity, fire_quantity);

        let mut tx = self.db.begin().await?;

        let consumption = sqlx::query_as::<_, DailyConsumption>(
            r#"
            INSERT INTO daily_consumptions (
                date, machine, petkim_quantity, fire_quantity,
                total_petkim, estol_quantity, talk_quantity
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, date, machine, petkim_quantity, fire_quantity,
                      total_petkim, estol_quantity, talk_quantity, created_at
            "#,
        )
        .bind(date)
        .bind(&input.machine)
        .bind(input.petkim_quantity)
        .bind(fire_quantity)
        .bind(totals.total_petkim)
        .bind(totals.estol_quantity)
        .bind(totals.talk_quantity)
        .fetch_one(&mut *tx)
        .await?;

        // All three decrements or none
        ledger::decrease_material_stock_by_name(
            &mut tx, PETKIM, totals.total_petkim, "daily_consumption", consumption.id,
        )
        .await?;
        if totals.estol_quantity > Decimal::ZERO {
            ledger::decrease_material_stock_by_name(
                &mut tx, ESTOL, totals.estol_quantity, "daily_consumption", consumption.id,
            )
            .await?;
        }
        if totals.talk_quantity > Decimal::ZERO {
            ledger::decrease_material_stock_by_name(
                &mut tx, TALK, totals.talk_quantity, "daily_consumption", consumption.id,
            )
            .await?;
        }

        tx.commit().await?;

        Ok(consumption)
    }

    /// List all daily consumptions, newest first
    pub async fn list_daily(&self) -> AppResult<Vec<DailyConsumption>> {
        let consumptions = sqlx::query_as::<_, DailyConsumption>(
            r#"
            SELECT id, date, machine, petkim_quantity, fire_quantity,
                   total_petkim, estol_quantity, talk_quantity, created_at
            FROM daily_consumptions
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(consumptions)
    }

    /// Record a day's gas usage and debit the gas material
    pub async fn record_gas(&self, input: RecordGasInput) -> AppResult<GasConsumption> {
        validate_positive(input.total_gas_kg).map_err(|msg| AppError::Validation {
            field: "total_gas_kg".to_string(),
            message: msg.to_string(),
            message_tr: "Gaz miktarı pozitif olmalı".to_string(),
        })?;

        let date = input.date.unwrap_or_else(Utc::now);

        let mut tx = self.db.begin().await?;

        let consumption = sqlx::query_as::<_, GasConsumption>(
            r#"
            INSERT INTO gas_consumptions (date, total_gas_kg)
            VALUES ($1, $2)
            RETURNING id, date, total_gas_kg, created_at
            "#,
        )
        .bind(date)
        .bind(input.total_gas_kg)
        .fetch_one(&mut *tx)
        .await?;

        ledger::decrease_material_stock_by_name(
            &mut tx, GAS, input.total_gas_kg, "gas_consumption", consumption.id,
        )
        .await?;

        tx.commit().await?;

        Ok(consumption)
    }

    /// List all gas consumptions, newest first
    pub async fn list_gas(&self) -> AppResult<Vec<GasConsumption>> {
        let consumptions = sqlx::query_as::<_, GasConsumption>(
            r#"
            SELECT id, date, total_gas_kg, created_at
            FROM gas_consumptions
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(consumptions)
    }
}

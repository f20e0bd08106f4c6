//! Raw material and material entry service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::ledger;
use shared::models::{MaterialEntry, RawMaterial};
use shared::types::DEFAULT_CURRENCY;
use shared::validation::{validate_material_code, validate_positive};

/// Service managing the raw-material catalog and inbound entries
#[derive(Clone)]
pub struct MaterialService {
    db: PgPool,
}

/// Input for creating a raw material
#[derive(Debug, Deserialize)]
pub struct CreateMaterialInput {
    pub name: String,
    pub code: String,
    pub unit: String,
    pub unit_price: Decimal,
    pub min_stock_level: Option<Decimal>,
}

/// Input for recording a material entry
#[derive(Debug, Deserialize)]
pub struct RecordEntryInput {
    pub entry_date: Option<DateTime<Utc>>,
    pub material_id: Uuid,
    pub quantity: Decimal,
    pub currency: Option<String>,
    pub unit_price: Decimal,
    pub total_amount: Option<Decimal>,
    pub supplier: Option<String>,
    pub invoice_number: Option<String>,
}

impl MaterialService {
    /// Create a new MaterialService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a raw material with zero opening stock.
    /// The code is immutable and globally unique.
    pub async fn create_material(&self, input: CreateMaterialInput) -> AppResult<RawMaterial> {
        validate_material_code(&input.code).map_err(|msg| AppError::Validation {
            field: "code".to_string(),
            message: msg.to_string(),
            message_tr: "Malzeme kodu geçersiz".to_string(),
        })?;

        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Name must not be empty".to_string(),
                message_tr: "Malzeme adı boş olamaz".to_string(),
            });
        }

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM raw_materials WHERE code = $1",
        )
        .bind(&input.code)
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(AppError::DuplicateEntry("code".to_string()));
        }

        let material = sqlx::query_as::<_, RawMaterial>(
            r#"
            INSERT INTO raw_materials (name, code, unit, unit_price, min_stock_level)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, code, unit, unit_price, min_stock_level, current_stock, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.code)
        .bind(&input.unit)
        .bind(input.unit_price)
        .bind(input.min_stock_level.unwrap_or(Decimal::ZERO))
        .fetch_one(&self.db)
        .await
        .map_err(|e| match &e {
            // Unique index race: two concurrent creates with the same code
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::DuplicateEntry("code".to_string())
            }
            _ => AppError::DatabaseError(e),
        })?;

        Ok(material)
    }

    /// List all raw materials
    pub async fn list_materials(&self) -> AppResult<Vec<RawMaterial>> {
        let materials = sqlx::query_as::<_, RawMaterial>(
            r#"
            SELECT id, name, code, unit, unit_price, min_stock_level, current_stock, created_at
            FROM raw_materials
            ORDER BY name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(materials)
    }

    /// Get one raw material with its current balance
    pub async fn get_material(&self, material_id: Uuid) -> AppResult<RawMaterial> {
        let material = sqlx::query_as::<_, RawMaterial>(
            r#"
            SELECT id, name, code, unit, unit_price, min_stock_level, current_stock, created_at
            FROM raw_materials
            WHERE id = $1
            "#,
        )
        .bind(material_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Material".to_string()))?;

        Ok(material)
    }

    /// Record an inbound material entry and credit the material's stock in
    /// one transaction. Returns the stored entry and the updated balance.
    pub async fn record_entry(
        &self,
        input: RecordEntryInput,
    ) -> AppResult<(MaterialEntry, Decimal)> {
        validate_positive(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
            message_tr: "Miktar pozitif olmalı".to_string(),
        })?;

        let entry_date = input.entry_date.unwrap_or_else(Utc::now);
        let currency = input
            .currency
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let total_amount = input
            .total_amount
            .unwrap_or_else(|| input.quantity * input.unit_price);

        let mut tx = self.db.begin().await?;

        let entry = sqlx::query_as::<_, MaterialEntry>(
            r#"
            INSERT INTO material_entries (
                entry_date, material_id, quantity, currency, unit_price,
                total_amount, supplier, invoice_number
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, entry_date, material_id, quantity, currency, unit_price,
                      total_amount, supplier, invoice_number, created_at
            "#,
        )
        .bind(entry_date)
        .bind(input.material_id)
        .bind(input.quantity)
        .bind(&currency)
        .bind(input.unit_price)
        .bind(total_amount)
        .bind(&input.supplier)
        .bind(&input.invoice_number)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            // FK violation: entry referencing a material that does not exist
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::NotFound("Material".to_string())
            }
            _ => AppError::DatabaseError(e),
        })?;

        let balance = ledger::increase_material_stock(
            &mut tx,
            input.material_id,
            input.quantity,
            "material_entry",
            entry.id,
        )
        .await?;

        tx.commit().await?;

        Ok((entry, balance))
    }

    /// List all material entries, newest first
    pub async fn list_entries(&self) -> AppResult<Vec<MaterialEntry>> {
        let entries = sqlx::query_as::<_, MaterialEntry>(
            r#"
            SELECT id, entry_date, material_id, quantity, currency, unit_price,
                   total_amount, supplier, invoice_number, created_at
            FROM material_entries
            ORDER BY entry_date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }
}

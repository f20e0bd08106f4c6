//! Shipment service
//!
//! Records outbound shipments: draws the next shipment number from the
//! sequence generator and debits the matching finished-goods bucket, all in
//! one transaction. A failed shipment rolls the drawn number back, keeping
//! the sequence gap-free.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::services::{ledger, sequence};
use shared::calc::square_meters;
use shared::models::Shipment;
use shared::types::SHIPMENT_NUMBER_PREFIX;
use shared::validation::validate_positive;

/// Shipment service
#[derive(Clone)]
pub struct ShipmentService {
    db: PgPool,
}

/// Input for recording a shipment
#[derive(Debug, Deserialize)]
pub struct RecordShipmentInput {
    pub shipment_date: Option<DateTime<Utc>>,
    pub customer_company: String,
    pub thickness_mm: Decimal,
    pub width_cm: Decimal,
    pub length_m: Decimal,
    pub quantity: i64,
    pub invoice_number: Option<String>,
    pub vehicle_plate: Option<String>,
    pub driver_name: Option<String>,
}

impl ShipmentService {
    /// Create a new ShipmentService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a shipment as one atomic transaction
    pub async fn record(&self, input: RecordShipmentInput) -> AppResult<Shipment> {
        if input.quantity <= 0 {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity must be positive".to_string(),
                message_tr: "Miktar pozitif olmalı".to_string(),
            });
        }
        if input.customer_company.trim().is_empty() {
            return Err(AppError::Validation {
                field: "customer_company".to_string(),
                message: "Customer company must not be empty".to_string(),
                message_tr: "Müşteri firma adı boş olamaz".to_string(),
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

        let shipment_date = input.shipment_date.unwrap_or_else(Utc::now);
        let sqm = square_meters(input.width_cm, input.length_m, input.quantity);

        let mut tx = self.db.begin().await?;

        let shipment_number = sequence::next(&mut tx, SHIPMENT_NUMBER_PREFIX).await?;

        let shipment = sqlx::query_as::<_, Shipment>(
            r#"
            INSERT INTO shipments (
                shipment_number, shipment_date, customer_company,
                thickness_mm, width_cm, length_m, quantity, square_meters,
                invoice_number, vehicle_plate, driver_name
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, shipment_number, shipment_date, customer_company,
                      thickness_mm, width_cm, length_m, quantity, square_meters,
                      invoice_number, vehicle_plate, driver_name, created_at
            "#,
        )
        .bind(&shipment_number)
        .bind(shipment_date)
        .bind(&input.customer_company)
        .bind(input.thickness_mm)
        .bind(input.width_cm)
        .bind(input.length_m)
        .bind(input.quantity)
        .bind(sqm)
        .bind(&input.invoice_number)
        .bind(&input.vehicle_plate)
        .bind(&input.driver_name)
        .fetch_one(&mut *tx)
        .await?;

        ledger::decrease_finished_goods(
            &mut tx,
            input.thickness_mm,
            input.width_cm,
            input.length_m,
            input.quantity,
            "shipment",
            shipment.id,
        )
        .await?;

        tx.commit().await?;

        Ok(shipment)
    }

    /// List all shipments, newest first
    pub async fn list(&self) -> AppResult<Vec<Shipment>> {
        let shipments = sqlx::query_as::<_, Shipment>(
            r#"
            SELECT id, shipment_number, shipment_date, customer_company,
                   thickness_mm, width_cm, length_m, quantity, square_meters,
                   invoice_number, vehicle_plate, driver_name, created_at
            FROM shipments
            ORDER BY shipment_date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(shipments)
    }
}

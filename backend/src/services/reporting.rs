//! Reporting service
//!
//! Aggregated read models: cost analysis over the raw-material catalog and
//! the dashboard summary. Multi-query reports run inside one REPEATABLE READ
//! transaction so every figure comes from the same committed snapshot.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    db: PgPool,
}

/// Per-material line of the cost analysis
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct MaterialCostLine {
    pub material_id: Uuid,
    pub name: String,
    pub code: String,
    pub unit: String,
    pub current_stock: Decimal,
    pub unit_price: Decimal,
    pub stock_value: Decimal,
}

/// Cost analysis report
#[derive(Debug, Serialize)]
pub struct CostAnalysis {
    pub materials: Vec<MaterialCostLine>,
    pub total_stock_value: Decimal,
}

/// Dashboard summary
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_materials: i64,
    pub low_stock_materials: i64,
    pub total_manufacturing_records: i64,
    pub total_square_meters_produced: Decimal,
    pub total_shipments: i64,
    pub total_square_meters_shipped: Decimal,
    pub total_daily_consumptions: i64,
    pub total_petkim_consumed: Decimal,
    pub finished_goods_quantity: i64,
    pub finished_goods_square_meters: Decimal,
}

impl ReportingService {
    /// Create a new ReportingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Stock value per material plus the grand total, from one snapshot
    pub async fn cost_analysis(&self) -> AppResult<CostAnalysis> {
        let mut tx = self.db.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let materials = sqlx::query_as::<_, MaterialCostLine>(
            r#"
            SELECT id AS material_id, name, code, unit, current_stock, unit_price,
                   current_stock * unit_price AS stock_value
            FROM raw_materials
            ORDER BY name
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let total_stock_value = materials.iter().map(|m| m.stock_value).sum();

        Ok(CostAnalysis {
            materials,
            total_stock_value,
        })
    }

    /// Counters and totals for the dashboard, all from one snapshot
    pub async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        let mut tx = self.db.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let total_materials =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM raw_materials")
                .fetch_one(&mut *tx)
                .await?;

        let low_stock_materials = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM raw_materials WHERE current_stock < min_stock_level",
        )
        .fetch_one(&mut *tx)
        .await?;

        let (total_manufacturing_records, total_square_meters_produced) =
            sqlx::query_as::<_, (i64, Decimal)>(
                "SELECT COUNT(*), COALESCE(SUM(square_meters), 0) FROM manufacturing_records",
            )
            .fetch_one(&mut *tx)
            .await?;

        let (total_shipments, total_square_meters_shipped) =
            sqlx::query_as::<_, (i64, Decimal)>(
                "SELECT COUNT(*), COALESCE(SUM(square_meters), 0) FROM shipments",
            )
            .fetch_one(&mut *tx)
            .await?;

        let (total_daily_consumptions, total_petkim_consumed) =
            sqlx::query_as::<_, (i64, Decimal)>(
                "SELECT COUNT(*), COALESCE(SUM(total_petkim), 0) FROM daily_consumptions",
            )
            .fetch_one(&mut *tx)
            .await?;

        let (finished_goods_quantity, finished_goods_square_meters) =
            sqlx::query_as::<_, (i64, Decimal)>(
                r#"
                SELECT COALESCE(SUM(total_quantity), 0)::BIGINT,
                       COALESCE(SUM(total_square_meters), 0)
                FROM finished_goods_stock
                WHERE total_quantity > 0
                "#,
            )
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(DashboardStats {
            total_materials,
            low_stock_materials,
            total_manufacturing_records,
            total_square_meters_produced,
            total_shipments,
            total_square_meters_shipped,
            total_daily_consumptions,
            total_petkim_consumed,
            finished_goods_quantity,
            finished_goods_square_meters,
        })
    }
}

//! HTTP handlers for cost analysis and dashboard reports

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::reporting::{CostAnalysis, DashboardStats, ReportingService};
use crate::AppState;

/// Stock value per material plus the grand total
pub async fn get_cost_analysis(
    State(state): State<AppState>,
) -> AppResult<Json<CostAnalysis>> {
    let service = ReportingService::new(state.db);
    let analysis = service.cost_analysis().await?;
    Ok(Json(analysis))
}

/// Dashboard summary counters and totals
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> AppResult<Json<DashboardStats>> {
    let service = ReportingService::new(state.db);
    let stats = service.dashboard_stats().await?;
    Ok(Json(stats))
}

//! HTTP handlers for daily and gas consumption

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::services::consumption::{
    ConsumptionService, RecordConsumptionInput, RecordGasInput,
};
use crate::AppState;
use crate::models::{DailyConsumption, GasConsumption};

/// Record a daily consumption; derived estol/talk quantities are computed
/// server-side and the materials debited atomically
pub async fn record_daily_consumption(
    State(state): State<AppState>,
    Json(input): Json<RecordConsumptionInput>,
) -> AppResult<(StatusCode, Json<DailyConsumption>)> {
    let service = ConsumptionService::new(state.db);
    let consumption = service.record_daily(input).await?;
    Ok((StatusCode::CREATED, Json(consumption)))
}

/// List all daily consumptions
pub async fn list_daily_consumptions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DailyConsumption>>> {
    let service = ConsumptionService::new(state.db);
    let consumptions = service.list_daily().await?;
    Ok(Json(consumptions))
}

/// Record a day's gas usage
pub async fn record_gas_consumption(
    State(state): State<AppState>,
    Json(input): Json<RecordGasInput>,
) -> AppResult<(StatusCode, Json<GasConsumption>)> {
    let service = ConsumptionService::new(state.db);
    let consumption = service.record_gas(input).await?;
    Ok((StatusCode::CREATED, Json(consumption)))
}

/// List all gas consumptions
pub async fn list_gas_consumptions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<GasConsumption>>> {
    let service = ConsumptionService::new(state.db);
    let consumptions = service.list_gas().await?;
    Ok(Json(consumptions))
}

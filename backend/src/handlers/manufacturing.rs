//! HTTP handlers for manufacturing records

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::services::manufacturing::{ManufacturingService, RecordManufacturingInput};
use crate::AppState;
use crate::models::ManufacturingRecord;

/// Record a production run
pub async fn record_manufacturing(
    State(state): State<AppState>,
    Json(input): Json<RecordManufacturingInput>,
) -> AppResult<(StatusCode, Json<ManufacturingRecord>)> {
    let service = ManufacturingService::new(state.db);
    let record = service.record(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List all manufacturing records
pub async fn list_manufacturing(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ManufacturingRecord>>> {
    let service = ManufacturingService::new(state.db);
    let records = service.list().await?;
    Ok(Json(records))
}

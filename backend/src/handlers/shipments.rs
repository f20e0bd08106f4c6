//! HTTP handlers for shipments

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::services::shipments::{RecordShipmentInput, ShipmentService};
use crate::AppState;
use crate::models::Shipment;

/// Record a shipment; draws the next shipment number and debits the matching
/// finished-goods bucket atomically
pub async fn record_shipment(
    State(state): State<AppState>,
    Json(input): Json<RecordShipmentInput>,
) -> AppResult<(StatusCode, Json<Shipment>)> {
    let service = ShipmentService::new(state.db);
    let shipment = service.record(input).await?;
    Ok((StatusCode::CREATED, Json(shipment)))
}

/// List all shipments
pub async fn list_shipments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Shipment>>> {
    let service = ShipmentService::new(state.db);
    let shipments = service.list().await?;
    Ok(Json(shipments))
}

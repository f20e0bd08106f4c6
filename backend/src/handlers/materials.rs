//! HTTP handlers for the raw-material catalog and material entries

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::materials::{CreateMaterialInput, MaterialService, RecordEntryInput};
use crate::AppState;
use crate::models::{MaterialEntry, RawMaterial};

/// Create a raw material
pub async fn create_material(
    State(state): State<AppState>,
    Json(input): Json<CreateMaterialInput>,
) -> AppResult<(StatusCode, Json<RawMaterial>)> {
    let service = MaterialService::new(state.db);
    let material = service.create_material(input).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// List all raw materials
pub async fn list_materials(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RawMaterial>>> {
    let service = MaterialService::new(state.db);
    let materials = service.list_materials().await?;
    Ok(Json(materials))
}

/// Get one raw material with its current balance
pub async fn get_material(
    State(state): State<AppState>,
    Path(material_id): Path<Uuid>,
) -> AppResult<Json<RawMaterial>> {
    let service = MaterialService::new(state.db);
    let material = service.get_material(material_id).await?;
    Ok(Json(material))
}

/// Record a material entry; credits the material's stock atomically
pub async fn record_entry(
    State(state): State<AppState>,
    Json(input): Json<RecordEntryInput>,
) -> AppResult<(StatusCode, Json<MaterialEntryResponse>)> {
    let service = MaterialService::new(state.db);
    let (entry, current_stock) = service.record_entry(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MaterialEntryResponse {
            entry,
            current_stock,
        }),
    ))
}

/// List all material entries
pub async fn list_entries(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MaterialEntry>>> {
    let service = MaterialService::new(state.db);
    let entries = service.list_entries().await?;
    Ok(Json(entries))
}

/// Response for a recorded entry with the updated material balance
#[derive(Debug, serde::Serialize)]
pub struct MaterialEntryResponse {
    #[serde(flatten)]
    pub entry: MaterialEntry,
    pub current_stock: Decimal,
}

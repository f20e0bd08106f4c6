//! HTTP handlers for the finished-goods snapshot and ledger history

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::LedgerService;
use crate::AppState;
use crate::models::{FinishedGoodsStock, StockMovement};

/// Current finished-goods balances per dimension bucket
pub async fn get_stock(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FinishedGoodsStock>>> {
    let service = LedgerService::new(state.db);
    let stock = service.get_stock_snapshot().await?;
    Ok(Json(stock))
}

/// Full ledger history, newest first
pub async fn list_stock_transactions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StockMovement>>> {
    let service = LedgerService::new(state.db);
    let movements = service.list_movements().await?;
    Ok(Json(movements))
}

//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Liveness endpoint reporting connectivity to the ledger store
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_ok = sqlx::query("SELECT 1").execute(&state.db).await.is_ok();

    Json(HealthResponse {
        status: overall_status(database_ok),
        service: "pms-server",
        version: env!("CARGO_PKG_VERSION"),
        database: if database_ok { "connected" } else { "unreachable" },
    })
}

/// Every ledger operation needs the store, so losing it degrades the whole
/// service rather than a single feature
fn overall_status(database_ok: bool) -> &'static str {
    if database_ok {
        "healthy"
    } else {
        "degraded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tracks_store_connectivity() {
        assert_eq!(overall_status(true), "healthy");
        assert_eq!(overall_status(false), "degraded");
    }
}

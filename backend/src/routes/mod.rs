//! Route definitions for the Production Management Platform

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes. The state is threaded into the auth middleware so
/// token validation shares the configured secret with token issuance.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (login public, /me protected)
        .nest("/auth", auth_routes(state.clone()))
        // Protected routes - raw-material catalog and entries
        .nest("/raw-materials", material_routes(state.clone()))
        .nest("/material-entries", material_entry_routes(state.clone()))
        // Protected routes - production
        .nest("/manufacturing", manufacturing_routes(state.clone()))
        // Protected routes - consumption
        .nest("/daily-consumptions", daily_consumption_routes(state.clone()))
        .nest("/gas-consumption", gas_consumption_routes(state.clone()))
        // Protected routes - shipments
        .nest("/shipments", shipment_routes(state.clone()))
        // Protected routes - stock snapshot and ledger history
        .nest("/stock", stock_routes(state.clone()))
        .nest("/stock-transactions", stock_transaction_routes(state.clone()))
        // Protected routes - reporting
        .nest("/costs", cost_routes(state.clone()))
        .nest("/dashboard", dashboard_routes(state.clone()))
        // Protected routes - user management (admin only)
        .nest("/users", user_routes(state))
}

/// Authentication routes
fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .nest("/me", me_routes(state))
}

/// Current-identity route (protected)
fn me_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Raw-material routes (protected)
fn material_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_materials).post(handlers::create_material),
        )
        .route("/:material_id", get(handlers::get_material))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Material entry routes (protected)
fn material_entry_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_entries).post(handlers::record_entry),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Manufacturing routes (protected)
fn manufacturing_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_manufacturing).post(handlers::record_manufacturing),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Daily consumption routes (protected)
fn daily_consumption_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_daily_consumptions).post(handlers::record_daily_consumption),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Gas consumption routes (protected)
fn gas_consumption_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_gas_consumptions).post(handlers::record_gas_consumption),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Shipment routes (protected)
fn shipment_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_shipments).post(handlers::record_shipment),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Finished-goods snapshot routes (protected)
fn stock_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_stock))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Ledger history routes (protected)
fn stock_transaction_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stock_transactions))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Cost analysis routes (protected)
fn cost_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/analysis", get(handlers::get_cost_analysis))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Dashboard routes (protected)
fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::get_dashboard_stats))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// User management routes (protected; admin enforced in handlers)
fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

//! Authentication handlers

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::services::auth::LoginResult;
use crate::services::AuthService;
use crate::AppState;
use crate::models::User;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResult>, AppError> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let result = auth_service.login(&body.username, &body.password).await?;

    Ok(Json(result))
}

/// Return the identity bound to the presented token
pub async fn me(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<User>, AppError> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let user = auth_service.get_user(current_user.0.user_id).await?;

    Ok(Json(user))
}

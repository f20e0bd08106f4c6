//! HTTP handlers for user management (admin only)

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::auth::CreateUserInput;
use crate::services::AuthService;
use crate::AppState;
use crate::models::User;

/// Create a user account
pub async fn create_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateUserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    require_admin(&current_user.0)?;

    let service = AuthService::new(state.db.clone(), &state.config);
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all user accounts
pub async fn list_users(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<User>>> {
    require_admin(&current_user.0)?;

    let service = AuthService::new(state.db.clone(), &state.config);
    let users = service.list_users().await?;
    Ok(Json(users))
}

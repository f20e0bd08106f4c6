//! Authentication middleware
//!
//! JWT authentication and role-based access control middleware

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use shared::types::Role;

use crate::error::{AppError, ErrorResponse};
use crate::AppState;

/// Authenticated user information extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: uuid::Uuid,
    pub username: String,
    pub role: Role,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Authentication middleware that validates JWT tokens
/// Note: Validation uses the same `jwt.secret` from application state that
/// token issuance signs with, so the two can never disagree regardless of
/// where the secret was configured (file or environment).
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return AppError::Unauthorized {
                message: "Missing or invalid Authorization header".to_string(),
                message_tr: "Yetkilendirme başlığı eksik veya geçersiz".to_string(),
            }
            .into_response();
        }
    };

    // Decode and validate JWT token against the issuing secret
    let claims = match decode_jwt(token, &state.config.jwt.secret) {
        Ok(claims) => claims,
        Err(error) => return error.into_response(),
    };

    // Parse identity from claims
    let user_id = match uuid::Uuid::parse_str(&claims.sub) {
        Ok(id) => id,
        Err(_) => return AppError::InvalidToken.into_response(),
    };

    let role = match Role::parse(&claims.role) {
        Some(role) => role,
        None => return AppError::InvalidToken.into_response(),
    };

    // Create AuthUser and insert into request extensions
    let auth_user = AuthUser {
        user_id,
        username: claims.username,
        role,
    };

    request.extensions_mut().insert(auth_user);

    next.run(request).await
}

/// JWT claims structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Claims {
    sub: String,
    username: String,
    role: String,
    exp: i64,
    iat: i64,
}

/// Decode and validate JWT token, distinguishing expiry from other failures
fn decode_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    use jsonwebtoken::errors::ErrorKind;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::TokenExpired,
        _ => AppError::InvalidToken,
    })
}

/// Extractor for authenticated user
/// Use this in handlers to get the current user
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: crate::error::ErrorDetail {
                        code: "UNAUTHORIZED".to_string(),
                        message_en: "Authentication required".to_string(),
                        message_tr: "Giriş yapmanız gerekiyor".to_string(),
                        field: None,
                    },
                };
                (StatusCode::UNAUTHORIZED, Json(error))
            })
    }
}

/// Role guard for use in handlers
/// Returns an error if the user is not an admin
pub fn require_admin(user: &AuthUser) -> Result<(), AppError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::InsufficientPermissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token_signed_with(secret: &str, expires_in: i64) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            username: "mehmet".to_string(),
            role: "operator".to_string(),
            exp: (now + Duration::seconds(expires_in)).timestamp(),
            iat: now.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    /// A token validates against the exact secret it was signed with,
    /// wherever that secret was configured
    #[test]
    fn test_decode_accepts_issuing_secret() {
        let token = token_signed_with("file-configured-secret", 3600);
        let claims = decode_jwt(&token, "file-configured-secret").unwrap();
        assert_eq!(claims.username, "mehmet");
        assert_eq!(claims.role, "operator");
    }

    #[test]
    fn test_decode_rejects_other_secret() {
        let token = token_signed_with("file-configured-secret", 3600);
        let result = decode_jwt(&token, "development-secret-key");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_decode_flags_expired_token() {
        // Well past the default validation leeway
        let token = token_signed_with("file-configured-secret", -600);
        let result = decode_jwt(&token, "file-configured-secret");
        assert!(matches!(result, Err(AppError::TokenExpired)));
    }
}

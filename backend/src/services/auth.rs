//! Authentication service for login, token issuance and user management

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use shared::models::User;
use shared::types::Role;
use shared::validation::{validate_password, validate_username};

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    jwt_secret: String,
    access_token_expiry: i64,
    admin_username: String,
    admin_password: String,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Successful login: bearer token plus the bound identity
#[derive(Debug, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Input for creating a user (admin only)
#[derive(Debug, Deserialize)]
pub struct CreateUserInput {
    pub username: String,
    pub password: String,
    pub role: Option<Role>,
}

/// User row from the database
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AppResult<User> {
        let role = Role::parse(&self.role)
            .ok_or_else(|| AppError::Internal(format!("Unknown role '{}' in store", self.role)))?;
        Ok(User {
            id: self.id,
            username: self.username,
            role,
            created_at: self.created_at,
        })
    }
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            jwt_secret: config.jwt.secret.clone(),
            access_token_expiry: config.jwt.access_token_expiry,
            admin_username: config.admin.username.clone(),
            admin_password: config.admin.password.clone(),
        }
    }

    /// Authenticate with username and password, returning a bearer token
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResult> {
        let user = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, role, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let user = user.into_user()?;
        let token = self.generate_token(&user)?;

        Ok(LoginResult {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
            user,
        })
    }

    /// Look up the identity bound to an authenticated request
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<User> {
        let user = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, role, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        user.into_user()
    }

    /// Create a user account (admin only; enforced at the handler)
    pub async fn create_user(&self, input: CreateUserInput) -> AppResult<User> {
        validate_username(&input.username).map_err(|msg| AppError::Validation {
            field: "username".to_string(),
            message: msg.to_string(),
            message_tr: "Kullanıcı adı geçersiz".to_string(),
        })?;
        validate_password(&input.password).map_err(|msg| AppError::Validation {
            field: "password".to_string(),
            message: msg.to_string(),
            message_tr: "Şifre çok kısa".to_string(),
        })?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE username = $1",
        )
        .bind(&input.username)
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(AppError::DuplicateEntry("username".to_string()));
        }

        let password_hash = hash(&input.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;
        let role = input.role.unwrap_or(Role::Operator);

        let user = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role, created_at
            "#,
        )
        .bind(&input.username)
        .bind(&password_hash)
        .bind(role.as_str())
        .fetch_one(&self.db)
        .await?;

        user.into_user()
    }

    /// List all user accounts (admin only; enforced at the handler)
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, role, created_at FROM users ORDER BY created_at",
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    /// Create the bootstrap admin account on first startup
    pub async fn ensure_admin_user(&self) -> AppResult<()> {
        let user_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db)
            .await?;

        if user_count > 0 {
            return Ok(());
        }

        tracing::info!("No users found, creating admin account '{}'", self.admin_username);

        let user = self
            .create_user(CreateUserInput {
                username: self.admin_username.clone(),
                password: self.admin_password.clone(),
                role: Some(Role::Admin),
            })
            .await?;

        tracing::info!("Admin account created (id: {})", user.id);
        Ok(())
    }

    /// Issue an HS256 bearer token bound to user id, username and role
    fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.access_token_expiry);

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }
}

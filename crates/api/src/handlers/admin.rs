//! Handlers for `/admin/users` (user account management, admin only).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use gbc_core::content::validate_email;
use gbc_core::error::CoreError;
use gbc_db::models::user::CreateUser;
use gbc_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LEN};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Roles assignable to user accounts.
const USER_ROLES: [&str; 2] = ["admin", "editor"];

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Defaults to `editor`.
    pub role: Option<String>,
}

/// GET /admin/users
pub async fn list_users(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// POST /admin/users
///
/// Create an account. The password is hashed with Argon2id before it
/// touches the database; duplicate usernames/emails surface as 409 via the
/// uq_ constraint mapping.
pub async fn create_user(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;

    if input.username.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "username must not be empty".into(),
        )));
    }
    validate_email(&input.email)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LEN)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = input.role.unwrap_or_else(|| "editor".to_string());
    if !USER_ROLES.contains(&role.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid role '{role}' (expected one of: {})",
            USER_ROLES.join(", ")
        ))));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            role,
        },
    )
    .await?;

    tracing::info!(admin_id = auth.user_id, user_id = user.id, "User account created");

    Ok((StatusCode::CREATED, Json(user)))
}

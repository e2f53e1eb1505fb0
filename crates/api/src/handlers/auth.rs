//! Handlers for the `/auth` resource (register, login, current user).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use agrisense_core::error::CoreError;
use agrisense_db::models::user::{CreateUser, UserResponse};
use agrisense_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::present;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`. Every field is optional so the
/// handler can answer missing fields with a 400 instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    /// Defaults to `farmer` when omitted.
    pub role: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserResponse,
}

/// Response body for `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create a user account and return a bearer token for it. Registering an
/// already-used email is a validation failure, not an internal error.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let (Some(email), Some(password), Some(name)) = (
        present(input.email.as_deref()),
        present(input.password.as_deref()),
        present(input.name.as_deref()),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Email, password and name are required".into(),
        )));
    };

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email: email.to_string(),
        password_hash,
        name: name.to_string(),
        role: present(input.role.as_deref()).map(str::to_string),
    };

    let user = UserRepo::create(&state.pool, &create).await.map_err(|e| {
        if is_unique_violation(&e, "uq_users_email") {
            AppError::Core(CoreError::Validation("User already exists".into()))
        } else {
            AppError::Database(e)
        }
    })?;

    let token = generate_token(user.id, &user.email, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully",
            token,
            user: user.into(),
        }),
    ))
}

/// POST /auth/login
///
/// Authenticate with email + password. An unknown email and a wrong password
/// produce the same 401 so the response does not leak which emails exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let (Some(email), Some(password)) = (
        present(input.email.as_deref()),
        present(input.password.as_deref()),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password are required".into(),
        )));
    };

    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_token(user.id, &user.email, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(AuthResponse {
        message: "Login successful",
        token,
        user: user.into(),
    }))
}

/// GET /auth/me
///
/// Return the authenticated user's profile.
pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<Json<MeResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "user {} from a valid token no longer exists",
                auth_user.user_id
            )))
        })?;

    Ok(Json(MeResponse { user: user.into() }))
}

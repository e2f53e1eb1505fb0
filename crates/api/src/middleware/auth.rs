//! Bearer-token authentication extractor.

use agrisense_core::error::CoreError;
use agrisense_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller identified by the JWT in the `Authorization` header.
///
/// Adding this extractor to a handler's parameters makes the route require
/// authentication; handlers read the owning user id from it rather than from
/// the request body or path.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Internal database id (the token's `sub` claim).
    pub user_id: DbId,
    pub email: String,
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The `Bearer ` prefix is stripped when present; anything left is
        // treated as the token. An absent or empty header is the only
        // "no token" case, everything else fails as an invalid token.
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.strip_prefix("Bearer ").unwrap_or(value))
            .filter(|token| !token.is_empty())
            .ok_or_else(|| unauthorized("Access denied. No token provided."))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid token"))?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

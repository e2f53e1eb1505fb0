use agrisense_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error type returned by every handler.
///
/// Its [`IntoResponse`] impl renders the single body shape clients see,
/// `{ "error": "..." }`. Validation and auth failures carry their message
/// through; anything else is logged server-side and answered with a fixed
/// 500 body so internals never reach the wire.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, msg.clone())
            }
            AppError::Core(CoreError::Internal(msg)) => internal(msg),
            // Handlers that want a friendlier answer for a specific database
            // failure (duplicate email, say) inspect the sqlx error before it
            // is converted; whatever reaches this point is a plain failure.
            AppError::Database(err) => internal(err),
            AppError::InternalError(msg) => internal(msg),
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

/// Log the real cause and return the sanitized 500 pair.
fn internal(cause: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!(error = %cause, "internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}

/// True when `err` is a PostgreSQL unique violation (code 23505) on the
/// named constraint.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

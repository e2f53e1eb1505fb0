/// Domain-level error kinds.
///
/// The API layer maps these one-to-one onto HTTP statuses: `Validation` is a
/// 400, `Unauthorized` a 401, and `Internal` a 500 whose message is logged
/// server-side but never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

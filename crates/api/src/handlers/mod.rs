//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate presence of required fields, delegate to the
//! corresponding repository in `agrisense_db`, and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod crop;
pub mod dashboard;
pub mod location;
pub mod sensor;
pub mod sensor_data;
pub mod variety;

/// A required field counts as present only when it is provided and non-blank
/// after trimming.
fn present(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|v| !v.is_empty())
}

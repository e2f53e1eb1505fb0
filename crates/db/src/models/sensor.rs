//! Sensor entity model and DTOs.

use agrisense_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row from the `sensors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sensor {
    pub id: DbId,
    pub user_id: DbId,
    pub location_id: DbId,
    pub name: String,
    pub sensor_type: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Sensor row joined with its location, for list responses. Joined columns
/// are flattened onto the row as aliases rather than nested objects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SensorWithLocation {
    pub id: DbId,
    pub user_id: DbId,
    pub location_id: DbId,
    pub name: String,
    pub sensor_type: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub location_name: String,
    pub location_type: String,
}

/// DTO for creating a new sensor. The owning user comes from the auth
/// token, not the body.
#[derive(Debug, Deserialize)]
pub struct CreateSensor {
    pub location_id: DbId,
    pub name: String,
    pub sensor_type: String,
    /// Defaults to `active` when omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing sensor. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSensor {
    pub location_id: Option<DbId>,
    pub name: Option<String>,
    pub sensor_type: Option<String>,
    pub status: Option<String>,
}

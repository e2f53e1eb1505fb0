//! Location entity model and DTOs.

use agrisense_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub location_type: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new location.
#[derive(Debug, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub location_type: String,
    pub description: Option<String>,
    pub address: Option<String>,
}

/// DTO for updating an existing location. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub location_type: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
}

//! Crop entity model and DTOs.

use agrisense_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row from the `crops` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Crop {
    pub id: DbId,
    pub user_id: DbId,
    pub variety_id: DbId,
    pub location_id: DbId,
    pub name: String,
    pub planting_date: NaiveDate,
    pub expected_harvest_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Crop row joined with its variety and location, for list and detail
/// responses. Joined columns are flattened onto the row as aliases rather
/// than nested objects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CropWithRefs {
    pub id: DbId,
    pub user_id: DbId,
    pub variety_id: DbId,
    pub location_id: DbId,
    pub name: String,
    pub planting_date: NaiveDate,
    pub expected_harvest_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub variety_name: String,
    pub variety_type: String,
    pub location_name: String,
    pub location_type: String,
}

/// DTO for creating a new crop. The owning user comes from the auth token,
/// not the body.
#[derive(Debug, Deserialize)]
pub struct CreateCrop {
    pub variety_id: DbId,
    pub location_id: DbId,
    pub name: String,
    pub planting_date: NaiveDate,
    pub expected_harvest_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for updating an existing crop. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateCrop {
    pub variety_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub name: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// One row of the per-status crop count aggregate.
#[derive(Debug, Clone, FromRow)]
pub struct CropStatusCount {
    pub status: String,
    pub count: i64,
}

//! Crop variety lookup model.
//!
//! Varieties are shared reference data seeded by migration; the API only
//! ever reads them.

use agrisense_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Row from the `crop_varieties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CropVariety {
    pub id: DbId,
    pub name: String,
    pub variety_type: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

//! Repository for the `crop_varieties` lookup table.

use sqlx::PgPool;

use crate::models::variety::CropVariety;

/// Column list for `crop_varieties` queries.
const COLUMNS: &str = "id, name, variety_type, description, created_at";

/// Read access to the shared crop variety catalogue.
pub struct VarietyRepo;

impl VarietyRepo {
    /// List varieties ordered by name, optionally filtered by a
    /// case-insensitive substring match on `variety_type`.
    pub async fn list(
        pool: &PgPool,
        variety_type: Option<&str>,
    ) -> Result<Vec<CropVariety>, sqlx::Error> {
        match variety_type {
            Some(filter) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM crop_varieties
                     WHERE variety_type ILIKE $1
                     ORDER BY name"
                );
                sqlx::query_as::<_, CropVariety>(&query)
                    .bind(format!("%{filter}%"))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM crop_varieties ORDER BY name");
                sqlx::query_as::<_, CropVariety>(&query).fetch_all(pool).await
            }
        }
    }
}

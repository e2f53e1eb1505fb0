//! Repository for the `crops` table.

use agrisense_core::types::DbId;
use sqlx::PgPool;

use crate::models::crop::{Crop, CropStatusCount, CropWithRefs, CreateCrop, UpdateCrop};

/// Column list for plain `crops` queries.
const COLUMNS: &str = "id, user_id, variety_id, location_id, name, planting_date, \
                       expected_harvest_date, notes, status, created_at, updated_at";

/// Column list for queries joining in variety and location columns.
const REF_COLUMNS: &str = "\
    c.id, c.user_id, c.variety_id, c.location_id, c.name, c.planting_date, \
    c.expected_harvest_date, c.notes, c.status, c.created_at, c.updated_at, \
    v.name AS variety_name, v.variety_type, l.name AS location_name, l.location_type";

/// Provides CRUD operations for a user's crops.
pub struct CropRepo;

impl CropRepo {
    /// Insert a new crop for `user_id`, returning the created row.
    ///
    /// The default status is 'active'.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateCrop,
    ) -> Result<Crop, sqlx::Error> {
        let query = format!(
            "INSERT INTO crops (user_id, variety_id, location_id, name, planting_date,
                                expected_harvest_date, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Crop>(&query)
            .bind(user_id)
            .bind(input.variety_id)
            .bind(input.location_id)
            .bind(&input.name)
            .bind(input.planting_date)
            .bind(input.expected_harvest_date)
            .bind(input.notes.as_deref())
            .fetch_one(pool)
            .await
    }

    /// List a user's crops with variety and location names, most recently
    /// created first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CropWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {REF_COLUMNS}
             FROM crops c
             JOIN crop_varieties v ON v.id = c.variety_id
             JOIN locations l ON l.id = c.location_id
             WHERE c.user_id = $1
             ORDER BY c.created_at DESC, c.id DESC"
        );
        sqlx::query_as::<_, CropWithRefs>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of a user's crops with variety and location names.
    ///
    /// Returns `None` if the row does not exist or belongs to another user.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<CropWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {REF_COLUMNS}
             FROM crops c
             JOIN crop_varieties v ON v.id = c.variety_id
             JOIN locations l ON l.id = c.location_id
             WHERE c.id = $1 AND c.user_id = $2"
        );
        sqlx::query_as::<_, CropWithRefs>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a user's crop. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the row does not exist or belongs to another user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateCrop,
    ) -> Result<Option<Crop>, sqlx::Error> {
        let query = format!(
            "UPDATE crops SET
                variety_id = COALESCE($3, variety_id),
                location_id = COALESCE($4, location_id),
                name = COALESCE($5, name),
                planting_date = COALESCE($6, planting_date),
                expected_harvest_date = COALESCE($7, expected_harvest_date),
                notes = COALESCE($8, notes),
                status = COALESCE($9, status),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Crop>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.variety_id)
            .bind(input.location_id)
            .bind(input.name.as_deref())
            .bind(input.planting_date)
            .bind(input.expected_harvest_date)
            .bind(input.notes.as_deref())
            .bind(input.status.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a user's crop. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM crops WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all of a user's crops.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM crops WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Count a user's crops with the given status.
    pub async fn count_by_status(
        pool: &PgPool,
        user_id: DbId,
        status: &str,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM crops WHERE user_id = $1 AND status = $2")
                .bind(user_id)
                .bind(status)
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }

    /// Count a user's crops grouped by status.
    pub async fn status_counts(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CropStatusCount>, sqlx::Error> {
        sqlx::query_as::<_, CropStatusCount>(
            "SELECT status, COUNT(*) AS count FROM crops
             WHERE user_id = $1
             GROUP BY status
             ORDER BY status",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

//! Repository for the `sensors` table.

use agrisense_core::types::DbId;
use sqlx::PgPool;

use crate::models::sensor::{CreateSensor, Sensor, SensorWithLocation, UpdateSensor};

/// Column list for plain `sensors` queries.
const COLUMNS: &str =
    "id, user_id, location_id, name, sensor_type, status, created_at, updated_at";

/// Column list for queries joining in location columns.
const REF_COLUMNS: &str = "\
    s.id, s.user_id, s.location_id, s.name, s.sensor_type, s.status, \
    s.created_at, s.updated_at, l.name AS location_name, l.location_type";

/// Provides CRUD operations for a user's sensors.
pub struct SensorRepo;

impl SensorRepo {
    /// Insert a new sensor for `user_id`, returning the created row.
    ///
    /// The default status is 'active'.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSensor,
    ) -> Result<Sensor, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or("active");

        let query = format!(
            "INSERT INTO sensors (user_id, location_id, name, sensor_type, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(user_id)
            .bind(input.location_id)
            .bind(&input.name)
            .bind(&input.sensor_type)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// List a user's sensors with location names, most recently created
    /// first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SensorWithLocation>, sqlx::Error> {
        let query = format!(
            "SELECT {REF_COLUMNS}
             FROM sensors s
             JOIN locations l ON l.id = s.location_id
             WHERE s.user_id = $1
             ORDER BY s.created_at DESC, s.id DESC"
        );
        sqlx::query_as::<_, SensorWithLocation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of a user's sensors.
    ///
    /// Returns `None` if the row does not exist or belongs to another user.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Sensor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sensors WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Sensor>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a user's sensor. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if the row does not exist or belongs to another user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateSensor,
    ) -> Result<Option<Sensor>, sqlx::Error> {
        let query = format!(
            "UPDATE sensors SET
                location_id = COALESCE($3, location_id),
                name = COALESCE($4, name),
                sensor_type = COALESCE($5, sensor_type),
                status = COALESCE($6, status),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.location_id)
            .bind(input.name.as_deref())
            .bind(input.sensor_type.as_deref())
            .bind(input.status.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Count all of a user's sensors.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sensors WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}

//! Repository for the `sensor_data` table.
//!
//! Readings are owner-scoped through the owning sensor: every read joins
//! `sensors` and filters on `sensors.user_id`.

use agrisense_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::sensor_data::{CreateSensorReading, ReadingWithSensor, SensorReading};

/// Column list for plain `sensor_data` queries.
const COLUMNS: &str = "id, sensor_id, temperature, humidity, ph, light_intensity, \
                       soil_moisture, recorded_at";

/// Column list for queries joining in the sensor name.
const REF_COLUMNS: &str = "\
    sd.id, sd.sensor_id, sd.temperature, sd.humidity, sd.ph, sd.light_intensity, \
    sd.soil_moisture, sd.recorded_at, s.name AS sensor_name";

/// Provides insert and windowed read operations for sensor readings.
pub struct SensorDataRepo;

impl SensorDataRepo {
    /// Record a new reading for a sensor. `recorded_at` is set by the
    /// database; client-supplied timestamps are not accepted.
    pub async fn insert(
        pool: &PgPool,
        sensor_id: DbId,
        input: &CreateSensorReading,
    ) -> Result<SensorReading, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensor_data (sensor_id, temperature, humidity, ph,
                                      light_intensity, soil_moisture)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(sensor_id)
            .bind(input.temperature)
            .bind(input.humidity)
            .bind(input.ph)
            .bind(input.light_intensity)
            .bind(input.soil_moisture)
            .fetch_one(pool)
            .await
    }

    /// List one sensor's readings, newest first, with optional date bounds.
    ///
    /// The join on `sensors.user_id` means a sensor owned by another user
    /// yields no rows.
    pub async fn list_for_sensor(
        pool: &PgPool,
        sensor_id: DbId,
        user_id: DbId,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
        limit: i64,
    ) -> Result<Vec<SensorReading>, sqlx::Error> {
        // Build dynamic date bounds.
        let mut conditions = Vec::new();
        let mut bind_idx = 3u32;

        if start.is_some() {
            conditions.push(format!("AND sd.recorded_at >= ${bind_idx}"));
            bind_idx += 1;
        }
        if end.is_some() {
            conditions.push(format!("AND sd.recorded_at <= ${bind_idx}"));
            bind_idx += 1;
        }

        let query = format!(
            "SELECT sd.id, sd.sensor_id, sd.temperature, sd.humidity, sd.ph, \
                    sd.light_intensity, sd.soil_moisture, sd.recorded_at \
             FROM sensor_data sd \
             JOIN sensors s ON s.id = sd.sensor_id \
             WHERE sd.sensor_id = $1 AND s.user_id = $2 \
             {bounds} \
             ORDER BY sd.recorded_at DESC \
             LIMIT ${bind_idx}",
            bounds = conditions.join(" "),
        );

        let mut q = sqlx::query_as::<_, SensorReading>(&query)
            .bind(sensor_id)
            .bind(user_id);
        if let Some(start) = start {
            q = q.bind(start);
        }
        if let Some(end) = end {
            q = q.bind(end);
        }
        q.bind(limit).fetch_all(pool).await
    }

    /// List all of a user's readings since `since`, newest first, with the
    /// sensor name joined in.
    ///
    /// A `None` limit binds NULL, which Postgres treats as LIMIT ALL.
    pub async fn recent_for_user(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
        limit: Option<i64>,
    ) -> Result<Vec<ReadingWithSensor>, sqlx::Error> {
        let query = format!(
            "SELECT {REF_COLUMNS}
             FROM sensor_data sd
             JOIN sensors s ON s.id = sd.sensor_id
             WHERE s.user_id = $1 AND sd.recorded_at >= $2
             ORDER BY sd.recorded_at DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, ReadingWithSensor>(&query)
            .bind(user_id)
            .bind(since)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List a user's readings since `since` in chronological order,
    /// optionally restricted to one sensor.
    pub async fn range_for_user(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
        sensor_id: Option<DbId>,
    ) -> Result<Vec<ReadingWithSensor>, sqlx::Error> {
        match sensor_id {
            Some(sensor_id) => {
                let query = format!(
                    "SELECT {REF_COLUMNS}
                     FROM sensor_data sd
                     JOIN sensors s ON s.id = sd.sensor_id
                     WHERE s.user_id = $1 AND sd.recorded_at >= $2 AND sd.sensor_id = $3
                     ORDER BY sd.recorded_at"
                );
                sqlx::query_as::<_, ReadingWithSensor>(&query)
                    .bind(user_id)
                    .bind(since)
                    .bind(sensor_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {REF_COLUMNS}
                     FROM sensor_data sd
                     JOIN sensors s ON s.id = sd.sensor_id
                     WHERE s.user_id = $1 AND sd.recorded_at >= $2
                     ORDER BY sd.recorded_at"
                );
                sqlx::query_as::<_, ReadingWithSensor>(&query)
                    .bind(user_id)
                    .bind(since)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}

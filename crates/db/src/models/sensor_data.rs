//! Sensor reading model and DTOs.

use agrisense_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row from the `sensor_data` table. Every metric is optional; a sensor
/// reports whichever fields it measures.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SensorReading {
    pub id: DbId,
    pub sensor_id: DbId,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ph: Option<f64>,
    pub light_intensity: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub recorded_at: Timestamp,
}

/// Reading joined with the owning sensor's name, for dashboard queries.
#[derive(Debug, Clone, FromRow)]
pub struct ReadingWithSensor {
    pub id: DbId,
    pub sensor_id: DbId,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ph: Option<f64>,
    pub light_intensity: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub recorded_at: Timestamp,
    pub sensor_name: String,
}

/// DTO for recording a new reading. `recorded_at` is always set
/// server-side.
#[derive(Debug, Deserialize)]
pub struct CreateSensorReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ph: Option<f64>,
    pub light_intensity: Option<f64>,
    pub soil_moisture: Option<f64>,
}

//! Threshold alerts derived from recent sensor readings.
//!
//! Pure logic, no database access. The caller is responsible for fetching
//! the reading window (newest first) and passing it in.

use serde::Serialize;

use crate::telemetry::ReadingSample;
use crate::types::Timestamp;

/// Optimal temperature band in degrees Celsius, inclusive.
pub const TEMPERATURE_RANGE: (f64, f64) = (15.0, 35.0);

/// Optimal relative humidity band in percent, inclusive.
pub const HUMIDITY_RANGE: (f64, f64) = (30.0, 80.0);

/// Optimal pH band, inclusive.
pub const PH_RANGE: (f64, f64) = (5.5, 7.5);

/// Soil moisture readings below this percentage are critical.
pub const SOIL_MOISTURE_MIN: f64 = 20.0;

/// At most this many alerts are reported per evaluation.
pub const MAX_ALERTS: usize = 10;

/// Which metric tripped a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Temperature,
    Humidity,
    Ph,
    SoilMoisture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Medium,
    High,
}

/// One threshold crossing on one reading.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    pub sensor: String,
    pub timestamp: Timestamp,
}

/// A reading paired with the name of the sensor that produced it.
#[derive(Debug, Clone)]
pub struct NamedReading {
    pub sensor_name: String,
    pub sample: ReadingSample,
}

/// Evaluate readings against the thresholds, newest first.
///
/// Only present fields are checked; a reported zero is evaluated like any
/// other value. Band comparisons are strict, so a reading exactly on a
/// boundary does not alert. The result is capped at [`MAX_ALERTS`].
pub fn evaluate(readings: &[NamedReading]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for reading in readings {
        let sample = &reading.sample;

        if let Some(v) = sample.temperature {
            if v < TEMPERATURE_RANGE.0 || v > TEMPERATURE_RANGE.1 {
                alerts.push(Alert {
                    kind: AlertKind::Temperature,
                    severity: AlertSeverity::High,
                    message: format!("Temperature {v}\u{b0}C is outside optimal range (15-35\u{b0}C)"),
                    sensor: reading.sensor_name.clone(),
                    timestamp: sample.recorded_at,
                });
            }
        }

        if let Some(v) = sample.humidity {
            if v < HUMIDITY_RANGE.0 || v > HUMIDITY_RANGE.1 {
                alerts.push(Alert {
                    kind: AlertKind::Humidity,
                    severity: AlertSeverity::Medium,
                    message: format!("Humidity {v}% is outside optimal range (30-80%)"),
                    sensor: reading.sensor_name.clone(),
                    timestamp: sample.recorded_at,
                });
            }
        }

        if let Some(v) = sample.ph {
            if v < PH_RANGE.0 || v > PH_RANGE.1 {
                alerts.push(Alert {
                    kind: AlertKind::Ph,
                    severity: AlertSeverity::High,
                    message: format!("pH {v} is outside optimal range (5.5-7.5)"),
                    sensor: reading.sensor_name.clone(),
                    timestamp: sample.recorded_at,
                });
            }
        }

        if let Some(v) = sample.soil_moisture {
            if v < SOIL_MOISTURE_MIN {
                alerts.push(Alert {
                    kind: AlertKind::SoilMoisture,
                    severity: AlertSeverity::High,
                    message: format!("Soil moisture {v}% is critically low"),
                    sensor: reading.sensor_name.clone(),
                    timestamp: sample.recorded_at,
                });
            }
        }
    }

    alerts.truncate(MAX_ALERTS);
    alerts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

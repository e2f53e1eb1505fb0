//! Sensor telemetry aggregation: window averages and daily bucketing.
//!
//! Pure logic, no database access. The caller is responsible for fetching
//! the reading rows and passing them in.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::Timestamp;

/// One sensor reading. A `None` field means the sensor did not report that
/// metric; a present zero is a real measurement.
#[derive(Debug, Clone)]
pub struct ReadingSample {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ph: Option<f64>,
    pub light_intensity: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub recorded_at: Timestamp,
}

/// Per-field arithmetic means over a reading window, rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricAverages {
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub light_intensity: f64,
    pub soil_moisture: f64,
}

impl MetricAverages {
    /// All-zero averages, the result for an empty window.
    pub const ZERO: Self = Self {
        temperature: 0.0,
        humidity: 0.0,
        ph: 0.0,
        light_intensity: 0.0,
        soil_moisture: 0.0,
    };
}

/// Per-field means for one UTC calendar date. Serializes flat for charting:
/// `{ "date": "2026-03-01", "temperature": 21.4, ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAverages {
    pub date: NaiveDate,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub light_intensity: f64,
    pub soil_moisture: f64,
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the per-field mean of a reading window.
///
/// A `None` field contributes 0 to the sum while the row still counts in the
/// denominator. An empty window yields [`MetricAverages::ZERO`].
pub fn average_readings(samples: &[ReadingSample]) -> MetricAverages {
    if samples.is_empty() {
        return MetricAverages::ZERO;
    }

    let mut temperature = 0.0;
    let mut humidity = 0.0;
    let mut ph = 0.0;
    let mut light_intensity = 0.0;
    let mut soil_moisture = 0.0;

    for sample in samples {
        temperature += sample.temperature.unwrap_or(0.0);
        humidity += sample.humidity.unwrap_or(0.0);
        ph += sample.ph.unwrap_or(0.0);
        light_intensity += sample.light_intensity.unwrap_or(0.0);
        soil_moisture += sample.soil_moisture.unwrap_or(0.0);
    }

    let count = samples.len() as f64;
    MetricAverages {
        temperature: round1(temperature / count),
        humidity: round1(humidity / count),
        ph: round1(ph / count),
        light_intensity: round1(light_intensity / count),
        soil_moisture: round1(soil_moisture / count),
    }
}

/// Bucket readings by UTC calendar date and average each bucket.
///
/// Buckets are returned in ascending date order; per-day means follow the
/// same rules as [`average_readings`]. Input order does not matter.
pub fn bucket_by_day(samples: &[ReadingSample]) -> Vec<DailyAverages> {
    let mut buckets: BTreeMap<NaiveDate, Vec<ReadingSample>> = BTreeMap::new();
    for sample in samples {
        buckets
            .entry(sample.recorded_at.date_naive())
            .or_default()
            .push(sample.clone());
    }

    buckets
        .into_iter()
        .map(|(date, day)| {
            let means = average_readings(&day);
            DailyAverages {
                date,
                temperature: means.temperature,
                humidity: means.humidity,
                ph: means.ph,
                light_intensity: means.light_intensity,
                soil_moisture: means.soil_moisture,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Handlers for the `/dashboard` aggregation endpoints.
//!
//! These handlers fetch the caller's reading windows and delegate the
//! arithmetic to the pure functions in `agrisense_core` (window averaging,
//! daily bucketing, alert thresholds).

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use agrisense_core::alerts::{Alert, NamedReading};
use agrisense_core::telemetry::{self, DailyAverages, MetricAverages, ReadingSample};
use agrisense_core::types::DbId;
use agrisense_db::models::sensor_data::ReadingWithSensor;
use agrisense_db::repositories::{CropRepo, SensorDataRepo, SensorRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Reading window for overview metrics and alerts, in hours.
const RECENT_WINDOW_HOURS: i64 = 24;

/// Newest rows the overview metrics consider within the window.
const OVERVIEW_MAX_READINGS: i64 = 50;

/// Chart span when the client does not pass `days`.
const DEFAULT_CHART_DAYS: i64 = 7;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /dashboard/charts/sensor-data`.
#[derive(Debug, Deserialize)]
pub struct ChartQueryParams {
    /// Days of history to include. Defaults to 7.
    pub days: Option<i64>,
    /// Restrict the chart to a single sensor.
    pub sensor_id: Option<DbId>,
}

/// Entity counts for the overview header cards. Keys are camelCase on the
/// wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewCounts {
    pub total_crops: i64,
    pub active_crops: i64,
    pub total_sensors: i64,
    /// Number of readings in the metrics window, after the row cap.
    pub recent_data_points: i64,
}

/// Response body for `GET /dashboard/overview`.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub overview: OverviewCounts,
    pub metrics: MetricAverages,
    #[serde(rename = "cropsByStatus")]
    pub crops_by_status: BTreeMap<String, i64>,
}

/// Response body for `GET /dashboard/charts/sensor-data`.
#[derive(Debug, Serialize)]
pub struct ChartDataResponse {
    #[serde(rename = "chartData")]
    pub chart_data: Vec<DailyAverages>,
}

/// Response body for `GET /dashboard/alerts`.
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /dashboard/overview
///
/// Entity counts, per-field metric means over the last 24 hours (newest 50
/// readings), and a crop status breakdown.
pub async fn overview(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<OverviewResponse>> {
    let user_id = auth_user.user_id;

    let total_crops = CropRepo::count_for_user(&state.pool, user_id).await?;
    let active_crops = CropRepo::count_by_status(&state.pool, user_id, "active").await?;
    let total_sensors = SensorRepo::count_for_user(&state.pool, user_id).await?;

    let since = Utc::now() - Duration::hours(RECENT_WINDOW_HOURS);
    let readings =
        SensorDataRepo::recent_for_user(&state.pool, user_id, since, Some(OVERVIEW_MAX_READINGS))
            .await?;

    let samples: Vec<ReadingSample> = readings.iter().map(to_sample).collect();
    let metrics = telemetry::average_readings(&samples);

    let crops_by_status: BTreeMap<String, i64> = CropRepo::status_counts(&state.pool, user_id)
        .await?
        .into_iter()
        .map(|row| (row.status, row.count))
        .collect();

    Ok(Json(OverviewResponse {
        overview: OverviewCounts {
            total_crops,
            active_crops,
            total_sensors,
            recent_data_points: samples.len() as i64,
        },
        metrics,
        crops_by_status,
    }))
}

/// GET /dashboard/charts/sensor-data
///
/// Per-day metric means over the last `days` days, ascending by date.
pub async fn chart_data(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<ChartQueryParams>,
) -> AppResult<Json<ChartDataResponse>> {
    let days = params.days.unwrap_or(DEFAULT_CHART_DAYS);
    let since = Utc::now() - Duration::days(days);

    let readings =
        SensorDataRepo::range_for_user(&state.pool, auth_user.user_id, since, params.sensor_id)
            .await?;
    let samples: Vec<ReadingSample> = readings.iter().map(to_sample).collect();

    Ok(Json(ChartDataResponse {
        chart_data: telemetry::bucket_by_day(&samples),
    }))
}

/// GET /dashboard/alerts
///
/// Threshold alerts over the last 24 hours of readings, newest first,
/// capped at 10.
pub async fn alerts(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<AlertsResponse>> {
    let since = Utc::now() - Duration::hours(RECENT_WINDOW_HOURS);
    let readings =
        SensorDataRepo::recent_for_user(&state.pool, auth_user.user_id, since, None).await?;

    let named: Vec<NamedReading> = readings
        .iter()
        .map(|row| NamedReading {
            sensor_name: row.sensor_name.clone(),
            sample: to_sample(row),
        })
        .collect();

    Ok(Json(AlertsResponse {
        alerts: agrisense_core::alerts::evaluate(&named),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Flatten a joined reading row into the core sample type.
fn to_sample(row: &ReadingWithSensor) -> ReadingSample {
    ReadingSample {
        temperature: row.temperature,
        humidity: row.humidity,
        ph: row.ph,
        light_intensity: row.light_intensity,
        soil_moisture: row.soil_moisture,
        recorded_at: row.recorded_at,
    }
}

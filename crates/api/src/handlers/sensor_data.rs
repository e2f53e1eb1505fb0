//! Handlers for sensor readings at `/sensors/{id}/data`.
//!
//! Readings are owner-scoped through the owning sensor: reads join on the
//! caller's sensors, and writes verify the sensor belongs to the caller
//! before inserting.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use agrisense_core::error::CoreError;
use agrisense_core::types::{DbId, Timestamp};
use agrisense_db::models::sensor_data::{CreateSensorReading, SensorReading};
use agrisense_db::repositories::{SensorDataRepo, SensorRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::present;

/// Rows returned by `GET /sensors/{id}/data` when the client does not pass
/// an explicit `limit`.
const DEFAULT_DATA_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Request / query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /sensors/{id}/data`.
#[derive(Debug, Deserialize)]
pub struct SensorDataQueryParams {
    /// Inclusive lower bound on `recorded_at`.
    pub start_date: Option<String>,
    /// Inclusive upper bound on `recorded_at`.
    pub end_date: Option<String>,
    pub limit: Option<i64>,
}

/// Response body for `GET /sensors/{id}/data`.
#[derive(Debug, Serialize)]
pub struct SensorDataResponse {
    pub sensor_data: Vec<SensorReading>,
}

/// Response body for `POST /sensors/{id}/data`.
#[derive(Debug, Serialize)]
pub struct SensorDataMessageResponse {
    pub message: &'static str,
    pub sensor_data: SensorReading,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /sensors/{id}/data
///
/// List one sensor's readings, newest first. A sensor owned by another user
/// yields an empty list, not an error.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<SensorDataQueryParams>,
) -> AppResult<Json<SensorDataResponse>> {
    let start = present(params.start_date.as_deref())
        .map(parse_bound)
        .transpose()?;
    let end = present(params.end_date.as_deref())
        .map(parse_bound)
        .transpose()?;
    let limit = params.limit.unwrap_or(DEFAULT_DATA_LIMIT);

    let sensor_data =
        SensorDataRepo::list_for_sensor(&state.pool, id, auth_user.user_id, start, end, limit)
            .await?;

    Ok(Json(SensorDataResponse { sensor_data }))
}

/// POST /sensors/{id}/data
///
/// Record a reading with any subset of the metric fields. The timestamp is
/// server-set. The sensor must belong to the caller.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSensorReading>,
) -> AppResult<(StatusCode, Json<SensorDataMessageResponse>)> {
    SensorRepo::find_for_user(&state.pool, id, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "sensor {id} not found for user {}",
                auth_user.user_id
            )))
        })?;

    let sensor_data = SensorDataRepo::insert(&state.pool, id, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SensorDataMessageResponse {
            message: "Sensor data added successfully",
            sensor_data,
        }),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a query date bound: RFC 3339, or a bare `YYYY-MM-DD` taken as UTC
/// midnight.
fn parse_bound(value: &str) -> Result<Timestamp, AppError> {
    if let Ok(ts) = value.parse::<Timestamp>() {
        return Ok(ts);
    }
    value
        .parse::<NaiveDate>()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid date format".into())))
}

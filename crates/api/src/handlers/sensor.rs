//! Handlers for the `/sensors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use agrisense_core::error::CoreError;
use agrisense_core::types::DbId;
use agrisense_db::models::sensor::{CreateSensor, Sensor, SensorWithLocation, UpdateSensor};
use agrisense_db::repositories::SensorRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::present;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /sensors`. Every field is optional so the handler
/// can answer missing fields with a 400 instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct CreateSensorRequest {
    pub name: Option<String>,
    pub sensor_type: Option<String>,
    pub location_id: Option<DbId>,
    /// Defaults to `active` when omitted.
    pub status: Option<String>,
}

/// Response body for `GET /sensors`.
#[derive(Debug, Serialize)]
pub struct SensorsResponse {
    pub sensors: Vec<SensorWithLocation>,
}

/// Response body for create and update: a message plus the affected row.
#[derive(Debug, Serialize)]
pub struct SensorMessageResponse {
    pub message: &'static str,
    pub sensor: Sensor,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /sensors
///
/// List the caller's sensors with location columns joined in, most recently
/// created first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<SensorsResponse>> {
    let sensors = SensorRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(SensorsResponse { sensors }))
}

/// POST /sensors
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateSensorRequest>,
) -> AppResult<(StatusCode, Json<SensorMessageResponse>)> {
    let (Some(name), Some(sensor_type), Some(location_id)) = (
        present(input.name.as_deref()),
        present(input.sensor_type.as_deref()),
        input.location_id,
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Name, sensor type and location are required".into(),
        )));
    };

    let create = CreateSensor {
        location_id,
        name: name.to_string(),
        sensor_type: sensor_type.to_string(),
        status: present(input.status.as_deref()).map(str::to_string),
    };

    let sensor = SensorRepo::create(&state.pool, auth_user.user_id, &create).await?;

    Ok((
        StatusCode::CREATED,
        Json(SensorMessageResponse {
            message: "Sensor created successfully",
            sensor,
        }),
    ))
}

/// PUT /sensors/{id}
///
/// Partial overwrite: only fields present in the body change; `updated_at`
/// is always bumped.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSensor>,
) -> AppResult<Json<SensorMessageResponse>> {
    let sensor = SensorRepo::update(&state.pool, id, auth_user.user_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "sensor {id} not found for user {}",
                auth_user.user_id
            )))
        })?;

    Ok(Json(SensorMessageResponse {
        message: "Sensor updated successfully",
        sensor,
    }))
}

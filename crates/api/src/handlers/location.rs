//! Handlers for the location endpoints nested under `/crops/locations`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use agrisense_core::error::CoreError;
use agrisense_core::types::DbId;
use agrisense_db::models::location::{CreateLocation, Location, UpdateLocation};
use agrisense_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::present;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /crops/locations`.
#[derive(Debug, Deserialize)]
pub struct CreateLocationRequest {
    pub name: Option<String>,
    pub location_type: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
}

/// Response body for `GET /crops/locations`.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
}

/// Response body for create and update: a message plus the affected row.
#[derive(Debug, Serialize)]
pub struct LocationMessageResponse {
    pub message: &'static str,
    pub location: Location,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /crops/locations
///
/// List the caller's locations, ordered by name.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<LocationsResponse>> {
    let locations = LocationRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(LocationsResponse { locations }))
}

/// POST /crops/locations
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateLocationRequest>,
) -> AppResult<(StatusCode, Json<LocationMessageResponse>)> {
    let (Some(name), Some(location_type)) = (
        present(input.name.as_deref()),
        present(input.location_type.as_deref()),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Name and location type are required".into(),
        )));
    };

    let create = CreateLocation {
        name: name.to_string(),
        location_type: location_type.to_string(),
        description: present(input.description.as_deref()).map(str::to_string),
        address: present(input.address.as_deref()).map(str::to_string),
    };

    let location = LocationRepo::create(&state.pool, auth_user.user_id, &create).await?;

    Ok((
        StatusCode::CREATED,
        Json(LocationMessageResponse {
            message: "Location created successfully",
            location,
        }),
    ))
}

/// PUT /crops/locations/{id}
///
/// Partial overwrite: only fields present in the body change; `updated_at`
/// is always bumped.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<LocationMessageResponse>> {
    let location = LocationRepo::update(&state.pool, id, auth_user.user_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "location {id} not found for user {}",
                auth_user.user_id
            )))
        })?;

    Ok(Json(LocationMessageResponse {
        message: "Location updated successfully",
        location,
    }))
}

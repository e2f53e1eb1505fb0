//! Handlers for the `/crops` resource.
//!
//! Every operation is owner-scoped: rows belonging to another user behave
//! exactly like rows that do not exist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use agrisense_core::error::CoreError;
use agrisense_core::types::DbId;
use agrisense_db::models::crop::{CreateCrop, Crop, CropWithRefs, UpdateCrop};
use agrisense_db::repositories::CropRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

use super::present;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /crops`. Dates arrive as `YYYY-MM-DD` strings;
/// every field is optional so the handler can answer missing fields with a
/// 400 instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct CreateCropRequest {
    pub name: Option<String>,
    pub variety_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub planting_date: Option<String>,
    pub expected_harvest_date: Option<String>,
    pub notes: Option<String>,
}

/// Response body for `GET /crops`.
#[derive(Debug, Serialize)]
pub struct CropsResponse {
    pub crops: Vec<CropWithRefs>,
}

/// Response body for `GET /crops/{id}`.
#[derive(Debug, Serialize)]
pub struct CropResponse {
    pub crop: CropWithRefs,
}

/// Response body for create and update: a message plus the affected row.
#[derive(Debug, Serialize)]
pub struct CropMessageResponse {
    pub message: &'static str,
    pub crop: Crop,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /crops
///
/// List the caller's crops with variety and location columns joined in,
/// most recently created first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<CropsResponse>> {
    let crops = CropRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(CropsResponse { crops }))
}

/// GET /crops/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CropResponse>> {
    let crop = CropRepo::find_for_user(&state.pool, id, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "crop {id} not found for user {}",
                auth_user.user_id
            )))
        })?;
    Ok(Json(CropResponse { crop }))
}

/// POST /crops
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateCropRequest>,
) -> AppResult<(StatusCode, Json<CropMessageResponse>)> {
    let (Some(name), Some(variety_id), Some(location_id), Some(planting_date)) = (
        present(input.name.as_deref()),
        input.variety_id,
        input.location_id,
        present(input.planting_date.as_deref()),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Name, variety, location and planting date are required".into(),
        )));
    };

    let planting_date = parse_date(planting_date)?;
    let expected_harvest_date = present(input.expected_harvest_date.as_deref())
        .map(parse_date)
        .transpose()?;

    let create = CreateCrop {
        variety_id,
        location_id,
        name: name.to_string(),
        planting_date,
        expected_harvest_date,
        notes: present(input.notes.as_deref()).map(str::to_string),
    };

    let crop = CropRepo::create(&state.pool, auth_user.user_id, &create).await?;

    Ok((
        StatusCode::CREATED,
        Json(CropMessageResponse {
            message: "Crop created successfully",
            crop,
        }),
    ))
}

/// PUT /crops/{id}
///
/// Partial overwrite: only fields present in the body change; `updated_at`
/// is always bumped.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCrop>,
) -> AppResult<Json<CropMessageResponse>> {
    let crop = CropRepo::update(&state.pool, id, auth_user.user_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "crop {id} not found for user {}",
                auth_user.user_id
            )))
        })?;

    Ok(Json(CropMessageResponse {
        message: "Crop updated successfully",
        crop,
    }))
}

/// DELETE /crops/{id}
///
/// Idempotent: deleting an absent or non-owned id still answers 200.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    CropRepo::delete(&state.pool, id, auth_user.user_id).await?;
    Ok(Json(MessageResponse {
        message: "Crop deleted successfully",
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO `YYYY-MM-DD` date string. Malformed input surfaces as an
/// unhandled failure, the same as any other bad value reaching the database.
fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    value
        .parse::<NaiveDate>()
        .map_err(|e| AppError::InternalError(format!("Invalid date '{value}': {e}")))
}

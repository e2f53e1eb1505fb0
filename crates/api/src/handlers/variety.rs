//! Handlers for the crop variety lookup at `/crops/varieties`.
//!
//! Varieties are shared seed data, not per-user rows, so there is no owner
//! scoping and no mutation surface.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use agrisense_db::models::variety::CropVariety;
use agrisense_db::repositories::VarietyRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::present;

// ---------------------------------------------------------------------------
// Request / query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /crops/varieties`.
#[derive(Debug, Deserialize)]
pub struct VarietyQueryParams {
    /// Case-insensitive substring filter on the variety type.
    pub variety_type: Option<String>,
}

/// Response body for `GET /crops/varieties`.
#[derive(Debug, Serialize)]
pub struct VarietiesResponse {
    pub varieties: Vec<CropVariety>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /crops/varieties
///
/// List crop varieties ordered by name, optionally filtered by type.
pub async fn list(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<VarietyQueryParams>,
) -> AppResult<Json<VarietiesResponse>> {
    let filter = present(params.variety_type.as_deref());
    let varieties = VarietyRepo::list(&state.pool, filter).await?;
    Ok(Json(VarietiesResponse { varieties }))
}

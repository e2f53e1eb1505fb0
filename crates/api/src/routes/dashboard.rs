//! Route definitions for the `/dashboard` aggregation endpoints.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET  /overview             -> overview
/// GET  /charts/sensor-data   -> chart_data
/// GET  /alerts               -> alerts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(dashboard::overview))
        .route("/charts/sensor-data", get(dashboard::chart_data))
        .route("/alerts", get(dashboard::alerts))
}

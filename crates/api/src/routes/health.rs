use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health. Answers 200 either way; `status` flips to `"degraded"`
/// when the database ping fails, which is what probes alert on.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = agrisense_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Health endpoint, mounted outside the authenticated API routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

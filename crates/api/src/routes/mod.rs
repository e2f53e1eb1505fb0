pub mod auth;
pub mod crops;
pub mod dashboard;
pub mod health;
pub mod sensors;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted at the server root.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/me                       current user
///
/// /crops                         list, create
/// /crops/varieties               variety lookup (GET)
/// /crops/locations               list, create
/// /crops/locations/{id}          update (PUT)
/// /crops/{id}                    get, update, delete
///
/// /sensors                       list, create
/// /sensors/{id}                  update (PUT)
/// /sensors/{id}/data             reading list, reading create
///
/// /dashboard/overview            entity counts + metric means (GET)
/// /dashboard/charts/sensor-data  per-day means (GET)
/// /dashboard/alerts              threshold alerts (GET)
/// ```
///
/// Everything except register/login (and the root-level `/health`) requires
/// a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, current user).
        .nest("/auth", auth::router())
        // Crop CRUD plus the variety lookup and location sub-resource.
        .nest("/crops", crops::router())
        // Sensor CRUD and per-sensor readings.
        .nest("/sensors", sensors::router())
        // Aggregation endpoints backed by the core telemetry/alert logic.
        .nest("/dashboard", dashboard::router())
}

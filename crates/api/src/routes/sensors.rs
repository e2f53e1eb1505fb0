//! Route definitions for the `/sensors` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{sensor, sensor_data};
use crate::state::AppState;

/// Routes mounted at `/sensors`.
///
/// ```text
/// GET  /            -> list
/// POST /            -> create
/// PUT  /{id}        -> update
/// GET  /{id}/data   -> reading list
/// POST /{id}/data   -> reading create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sensor::list).post(sensor::create))
        .route("/{id}", put(sensor::update))
        .route(
            "/{id}/data",
            get(sensor_data::list).post(sensor_data::create),
        )
}

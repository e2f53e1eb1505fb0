//! Route definitions for the `/crops` resource.
//!
//! Also hosts the variety lookup and the location sub-resource, which the
//! API nests under `/crops` rather than at the top level.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{crop, location, variety};
use crate::state::AppState;

/// Routes mounted at `/crops`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /varieties        -> variety list
/// GET    /locations        -> location list
/// POST   /locations        -> location create
/// PUT    /locations/{id}   -> location update
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
///
/// The static `varieties` and `locations` segments take precedence over
/// `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(crop::list).post(crop::create))
        .route("/varieties", get(variety::list))
        .route("/locations", get(location::list).post(location::create))
        .route("/locations/{id}", put(location::update))
        .route(
            "/{id}",
            get(crop::get_by_id).put(crop::update).delete(crop::delete),
        )
}

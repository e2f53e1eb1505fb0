//! HTTP-level integration tests for the `/dashboard` aggregation endpoints:
//! overview counts and means, per-day chart buckets, and threshold alerts.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_json, build_test_app, get_auth, post_json_auth, put_json_auth, register_user,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a user and create a location, returning `(token, location_id)`.
async fn setup_farmer(pool: &PgPool, email: &str) -> (String, i64) {
    let token = register_user(build_test_app(pool.clone()), email).await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/crops/locations",
        json!({ "name": "Main Field", "location_type": "field" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location_id = body_json(response).await["location"]["id"].as_i64().unwrap();

    (token, location_id)
}

async fn create_sensor(pool: &PgPool, token: &str, location_id: i64, name: &str) -> i64 {
    let body = json!({ "name": name, "sensor_type": "multi", "location_id": location_id });
    let response = post_json_auth(build_test_app(pool.clone()), "/sensors", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["sensor"]["id"].as_i64().unwrap()
}

/// Create a crop and return its id.
async fn create_crop(pool: &PgPool, token: &str, location_id: i64, name: &str) -> i64 {
    let response = get_auth(build_test_app(pool.clone()), "/crops/varieties", token).await;
    let variety_id = body_json(response).await["varieties"][0]["id"].as_i64().unwrap();

    let body = json!({
        "name": name,
        "variety_id": variety_id,
        "location_id": location_id,
        "planting_date": "2026-03-01",
    });
    let response = post_json_auth(build_test_app(pool.clone()), "/crops", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["crop"]["id"].as_i64().unwrap()
}

/// Insert a reading with an explicit timestamp. The API always stamps
/// readings with the current time, so window and ordering tests write rows
/// directly.
async fn backdated_reading(
    pool: &PgPool,
    sensor_id: i64,
    temperature: Option<f64>,
    humidity: Option<f64>,
    ph: Option<f64>,
    soil_moisture: Option<f64>,
    hours_ago: i64,
) {
    sqlx::query(
        "INSERT INTO sensor_data (sensor_id, temperature, humidity, ph, soil_moisture, recorded_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(sensor_id)
    .bind(temperature)
    .bind(humidity)
    .bind(ph)
    .bind(soil_moisture)
    .bind(Utc::now() - Duration::hours(hours_ago))
    .execute(pool)
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

/// A brand-new account sees zeroed counts, zeroed means, and an empty status
/// breakdown rather than nulls or errors.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overview_empty_account(pool: PgPool) {
    let token = register_user(build_test_app(pool.clone()), "fresh@farm.test").await;

    let response = get_auth(build_test_app(pool), "/dashboard/overview", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["overview"]["totalCrops"], 0);
    assert_eq!(json["overview"]["activeCrops"], 0);
    assert_eq!(json["overview"]["totalSensors"], 0);
    assert_eq!(json["overview"]["recentDataPoints"], 0);
    assert_eq!(json["metrics"]["temperature"], 0.0);
    assert_eq!(json["metrics"]["humidity"], 0.0);
    assert_eq!(json["metrics"]["ph"], 0.0);
    assert_eq!(json["metrics"]["light_intensity"], 0.0);
    assert_eq!(json["metrics"]["soil_moisture"], 0.0);
    assert_eq!(json["cropsByStatus"], json!({}));
}

/// Counts, per-field means, and the status breakdown reflect the caller's
/// data. A reading that skips a metric drags that metric's mean toward zero.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overview_counts_and_means(pool: PgPool) {
    let (token, location_id) = setup_farmer(&pool, "grower@farm.test").await;

    create_crop(&pool, &token, location_id, "Lot A").await;
    create_crop(&pool, &token, location_id, "Lot B").await;
    let harvested = create_crop(&pool, &token, location_id, "Lot C").await;
    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/crops/{harvested}"),
        json!({ "status": "harvested" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let sensor_a = create_sensor(&pool, &token, location_id, "Field A").await;
    let sensor_b = create_sensor(&pool, &token, location_id, "Field B").await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/sensors/{sensor_a}/data"),
        json!({ "temperature": 20.0, "humidity": 60.0 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/sensors/{sensor_b}/data"),
        json!({ "temperature": 25.0 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(build_test_app(pool), "/dashboard/overview", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["overview"]["totalCrops"], 3);
    assert_eq!(json["overview"]["activeCrops"], 2);
    assert_eq!(json["overview"]["totalSensors"], 2);
    assert_eq!(json["overview"]["recentDataPoints"], 2);
    // (20 + 25) / 2
    assert_eq!(json["metrics"]["temperature"], 22.5);
    // The second reading skipped humidity: (60 + 0) / 2.
    assert_eq!(json["metrics"]["humidity"], 30.0);
    assert_eq!(json["metrics"]["ph"], 0.0);
    assert_eq!(json["cropsByStatus"], json!({ "active": 2, "harvested": 1 }));
}

/// Readings older than 24 hours do not feed the overview metrics.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overview_window_excludes_old_readings(pool: PgPool) {
    let (token, location_id) = setup_farmer(&pool, "recent@farm.test").await;
    let sensor = create_sensor(&pool, &token, location_id, "Field A").await;
    backdated_reading(&pool, sensor, Some(40.0), None, None, None, 30).await;
    backdated_reading(&pool, sensor, Some(20.0), None, None, None, 1).await;

    let response = get_auth(build_test_app(pool), "/dashboard/overview", &token).await;

    let json = body_json(response).await;
    assert_eq!(json["overview"]["recentDataPoints"], 1);
    assert_eq!(json["metrics"]["temperature"], 20.0);
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// Chart rows bucket by UTC calendar date, ascending, averaging each day.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_chart_buckets_days_ascending(pool: PgPool) {
    let (token, location_id) = setup_farmer(&pool, "charts@farm.test").await;
    let sensor = create_sensor(&pool, &token, location_id, "Field A").await;

    // Insert out of order across three calendar dates. Offsets are exact
    // multiples of 24h so each lands one date earlier than the previous.
    backdated_reading(&pool, sensor, Some(18.0), None, None, None, 24).await;
    backdated_reading(&pool, sensor, Some(10.0), None, None, None, 48).await;
    backdated_reading(&pool, sensor, Some(30.0), None, None, None, 0).await;
    backdated_reading(&pool, sensor, Some(20.0), None, None, None, 48).await;

    let response = get_auth(build_test_app(pool), "/dashboard/charts/sensor-data", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json["chartData"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    // Two days ago: (10 + 20) / 2.
    assert_eq!(rows[0]["temperature"], 15.0);
    assert_eq!(rows[1]["temperature"], 18.0);
    assert_eq!(rows[2]["temperature"], 30.0);

    let dates: Vec<&str> = rows.iter().map(|r| r["date"].as_str().unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted, "buckets should be in ascending date order");
}

/// `sensor_id` restricts the chart to one sensor; `days` narrows the window.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_chart_sensor_filter_and_days_window(pool: PgPool) {
    let (token, location_id) = setup_farmer(&pool, "filters@farm.test").await;
    let sensor_a = create_sensor(&pool, &token, location_id, "Field A").await;
    let sensor_b = create_sensor(&pool, &token, location_id, "Field B").await;
    backdated_reading(&pool, sensor_a, Some(10.0), None, None, None, 25).await;
    backdated_reading(&pool, sensor_b, Some(30.0), None, None, None, 1).await;

    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/dashboard/charts/sensor-data?sensor_id={sensor_a}"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    let rows = json["chartData"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["temperature"], 10.0);

    // days=1 keeps only the reading from an hour ago.
    let response = get_auth(
        build_test_app(pool),
        "/dashboard/charts/sensor-data?days=1",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let rows = json["chartData"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["temperature"], 30.0);
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// Each out-of-band metric raises its alert with the formatted message,
/// newest reading first.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_alerts_thresholds_and_messages(pool: PgPool) {
    let (token, location_id) = setup_farmer(&pool, "watcher@farm.test").await;
    let sensor = create_sensor(&pool, &token, location_id, "Field A").await;

    // Distinct timestamps make the newest-first order deterministic.
    backdated_reading(&pool, sensor, None, None, None, Some(12.0), 4).await;
    backdated_reading(&pool, sensor, None, None, Some(4.2), None, 3).await;
    backdated_reading(&pool, sensor, None, Some(85.0), None, None, 2).await;
    backdated_reading(&pool, sensor, Some(40.0), None, None, None, 1).await;
    // Fully in-band reading raises nothing.
    backdated_reading(&pool, sensor, Some(22.0), Some(55.0), Some(6.5), Some(45.0), 0).await;

    let response = get_auth(build_test_app(pool), "/dashboard/alerts", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let alerts = json["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 4);

    assert_eq!(alerts[0]["type"], "temperature");
    assert_eq!(alerts[0]["severity"], "high");
    assert_eq!(alerts[0]["message"], "Temperature 40°C is outside optimal range (15-35°C)");
    assert_eq!(alerts[0]["sensor"], "Field A");

    assert_eq!(alerts[1]["type"], "humidity");
    assert_eq!(alerts[1]["severity"], "medium");
    assert_eq!(alerts[1]["message"], "Humidity 85% is outside optimal range (30-80%)");

    assert_eq!(alerts[2]["type"], "ph");
    assert_eq!(alerts[2]["severity"], "high");
    assert_eq!(alerts[2]["message"], "pH 4.2 is outside optimal range (5.5-7.5)");

    assert_eq!(alerts[3]["type"], "soil_moisture");
    assert_eq!(alerts[3]["severity"], "high");
    assert_eq!(alerts[3]["message"], "Soil moisture 12% is critically low");
}

/// Readings exactly on a band boundary stay quiet, and violations older than
/// the 24-hour window are not re-raised.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_alerts_boundaries_and_window(pool: PgPool) {
    let (token, location_id) = setup_farmer(&pool, "calm@farm.test").await;
    let sensor = create_sensor(&pool, &token, location_id, "Field A").await;

    backdated_reading(&pool, sensor, Some(15.0), Some(30.0), Some(5.5), Some(20.0), 2).await;
    backdated_reading(&pool, sensor, Some(35.0), Some(80.0), Some(7.5), None, 1).await;
    // Out of band, but out of window too.
    backdated_reading(&pool, sensor, Some(40.0), None, None, None, 30).await;

    let response = get_auth(build_test_app(pool), "/dashboard/alerts", &token).await;

    let json = body_json(response).await;
    assert_eq!(json["alerts"].as_array().unwrap().len(), 0);
}

/// No more than ten alerts are reported even when more readings violate.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_alerts_capped_at_ten(pool: PgPool) {
    let (token, location_id) = setup_farmer(&pool, "noisy@farm.test").await;
    let sensor = create_sensor(&pool, &token, location_id, "Field A").await;
    for hours_ago in 1..=12 {
        backdated_reading(&pool, sensor, Some(40.0), None, None, None, hours_ago).await;
    }

    let response = get_auth(build_test_app(pool), "/dashboard/alerts", &token).await;

    let json = body_json(response).await;
    assert_eq!(json["alerts"].as_array().unwrap().len(), 10);
}

/// Dashboard aggregates only ever see the caller's own farm.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_is_owner_scoped(pool: PgPool) {
    let (owner, location_id) = setup_farmer(&pool, "mine@farm.test").await;
    create_crop(&pool, &owner, location_id, "Lot A").await;
    let sensor = create_sensor(&pool, &owner, location_id, "Field A").await;
    backdated_reading(&pool, sensor, Some(40.0), None, None, None, 1).await;

    let other = register_user(build_test_app(pool.clone()), "theirs@farm.test").await;

    let response = get_auth(build_test_app(pool.clone()), "/dashboard/overview", &other).await;
    let json = body_json(response).await;
    assert_eq!(json["overview"]["totalCrops"], 0);
    assert_eq!(json["overview"]["totalSensors"], 0);
    assert_eq!(json["overview"]["recentDataPoints"], 0);

    let response = get_auth(build_test_app(pool.clone()), "/dashboard/alerts", &other).await;
    assert_eq!(body_json(response).await["alerts"].as_array().unwrap().len(), 0);

    let response = get_auth(build_test_app(pool), "/dashboard/alerts", &owner).await;
    assert_eq!(body_json(response).await["alerts"].as_array().unwrap().len(), 1);
}

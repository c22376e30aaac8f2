//! Payment stubs. Mounted both at the site root and under `/api/paypal`.

use super::merge_over;
use crate::server::{ApiError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/setup", get(setup))
        .route("/order", post(create_order))
        .route("/order/{order_id}/capture", post(capture_order))
}

async fn setup() -> Json<Value> {
    Json(json!({"clientToken": "TEST_CLIENT_TOKEN"}))
}

async fn create_order(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(merge_over(
        json!({"id": "TEST_ORDER_ID", "status": "CREATED"}),
        body,
    )))
}

async fn capture_order(Path(order_id): Path<String>) -> Json<Value> {
    Json(json!({"id": order_id, "status": "COMPLETED"}))
}

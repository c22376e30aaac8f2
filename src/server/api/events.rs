use crate::server::{ApiError, AppState};
use axum::{extract::rejection::JsonRejection, routing::get, Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router<AppState> {
    Router::new().route("/events", get(list_events).post(create_event))
}

async fn list_events() -> Json<Value> {
    Json(json!([]))
}

async fn create_event(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(event) = payload?;
    Ok(Json(json!({ "created": event })))
}

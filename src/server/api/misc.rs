use crate::server::AppState;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/", get(health_check))
        .route("/dashboard/stats", get(dashboard_stats))
        .route("/profile", get(profile))
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn dashboard_stats() -> Json<Value> {
    Json(json!({"posts": 1, "gigs": 1, "products": 1}))
}

async fn profile() -> Json<Value> {
    Json(json!({"id": 1, "name": "Guest"}))
}

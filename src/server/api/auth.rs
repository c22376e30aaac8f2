use crate::server::{ApiError, AppState};
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login))
        .route("/logout", post(logout))
        .route("/auth/user", get(current_user).patch(update_user))
}

async fn login() -> Json<Value> {
    Json(json!({"status": "login", "message": "Use your auth provider here"}))
}

async fn logout() -> Json<Value> {
    Json(json!({"status": "logged_out"}))
}

async fn current_user() -> Json<Value> {
    Json(json!({
        "id": 1,
        "username": "guest",
        "firstName": "Guest",
        "lastName": "User"
    }))
}

async fn update_user(payload: Result<Json<Value>, JsonRejection>) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(json!({ "updated": body })))
}

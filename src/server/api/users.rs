use crate::server::AppState;
use axum::{extract::Path, routing::get, Json, Router};
use serde_json::{json, Value};

// Static segments take priority over `{identifier}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/gigs", get(empty_list))
        .route("/users/products", get(empty_list))
        .route("/users/blogs", get(empty_list))
        .route("/users/{identifier}", get(user_detail))
}

async fn list_users() -> Json<Value> {
    Json(json!([{ "id": 1, "username": "guest" }]))
}

async fn user_detail(Path(identifier): Path<String>) -> Json<Value> {
    Json(json!({
        "id": 1,
        "username": identifier,
        "firstName": "Guest",
        "lastName": "User"
    }))
}

async fn empty_list() -> Json<Value> {
    Json(json!([]))
}

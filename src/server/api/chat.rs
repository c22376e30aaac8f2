use crate::server::{ApiError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/conversations", get(list_conversations))
        .route("/conversations/{user_id}", get(conversation_detail))
        .route("/messages", post(send_message))
        .route("/chat", get(list_messages))
}

async fn list_conversations() -> Json<Value> {
    Json(json!([{ "user": { "id": 2, "name": "Alice" }, "lastMessage": "Hi" }]))
}

async fn conversation_detail(Path(user_id): Path<String>) -> Json<Value> {
    Json(json!({ "user": { "id": user_id, "name": "Alice" }, "messages": [] }))
}

async fn send_message(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(message) = payload?;
    Ok(Json(json!({ "sent": message })))
}

async fn list_messages() -> Json<Value> {
    Json(json!({ "messages": [] }))
}

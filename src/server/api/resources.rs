//! Posts, gigs, products and blogs. Listings are fixed samples; creation
//! echoes the submitted object with a placeholder id.

use super::merge_over;
use crate::server::{ApiError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};

type Body = Result<Json<Map<String, Value>>, JsonRejection>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create))
        .route("/gigs", get(list_gigs).post(create))
        .route("/gigs/{gig_id}/order", post(order_gig))
        .route("/products", get(list_products).post(create))
        .route("/blogs", get(list_blogs).post(create))
}

async fn create(payload: Body) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(merge_over(json!({"id": 1}), body)))
}

async fn list_posts() -> Json<Value> {
    Json(json!([{ "id": 1, "title": "Hello", "content": "World" }]))
}

async fn list_gigs() -> Json<Value> {
    Json(json!([{
        "id": 1,
        "title": "Sample Gig",
        "price": 50,
        "active": true,
        "deliveryTime": 3,
        "rating": 4.8,
        "userId": 2,
        "user": { "firstName": "Alice", "lastName": "Smith" }
    }]))
}

async fn order_gig(Path(gig_id): Path<String>) -> Json<Value> {
    Json(json!({"gigId": gig_id, "orderId": "ORDER123", "status": "CREATED"}))
}

async fn list_products() -> Json<Value> {
    Json(json!([{ "id": 1, "name": "Sample Product", "price": 20 }]))
}

async fn list_blogs() -> Json<Value> {
    Json(json!([{ "id": 1, "title": "First Blog", "content": "Lorem ipsum" }]))
}

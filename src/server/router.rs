use super::{api, cors, AppState};
use crate::config::ServerConfig;
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", api::router())
        .merge(api::paypal::router())
        .layer(cors::build_cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

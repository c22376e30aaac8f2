pub mod ai;
pub mod auth;
pub mod chat;
pub mod events;
pub mod misc;
pub mod paypal;
pub mod resources;
pub mod users;

use super::{ApiError, AppState};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Router,
};
use serde_json::{Map, Value};

/// Build the `/api` router with all resource routes
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(misc::router())
        .merge(auth::router())
        .merge(users::router())
        .merge(resources::router())
        .merge(chat::router())
        .merge(events::router())
        .merge(ai::router())
        .nest("/paypal", paypal::router())
}

/// Overlay a request body on a fixed object; body keys win.
pub(crate) fn merge_over(base: Value, body: Map<String, Value>) -> Value {
    let mut merged = match base {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    merged.extend(body);
    Value::Object(merged)
}

/// Request body where absence is allowed: no body, a blank body or `null`
/// all read as `Value::Null`. Only syntactically broken JSON is rejected.
pub(crate) struct OptionalJson(pub Value);

impl<S: Send + Sync> FromRequest<S> for OptionalJson {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Null));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            ApiError::bad_request(format!("Failed to parse the request body as JSON: {}", e))
        })
    }
}

impl OptionalJson {
    /// Text value of a field; missing and `null` count as absent, scalars are stringified.
    pub(crate) fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

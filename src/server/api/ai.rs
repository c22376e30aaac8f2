use super::OptionalJson;
use crate::server::{ApiError, AppState};
use crate::storage::InteractionRecord;
use crate::GeneratedBlog;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ai/chats", get(list_chats))
        .route("/ai/chat", post(submit_chat))
        .route("/ai/content-ideas", post(content_ideas))
        .route("/blogs/generate", post(generate_blog))
}

#[derive(Debug)]
struct ChatRequest {
    message: String,
    chat_type: Option<String>,
}

impl From<OptionalJson> for ChatRequest {
    fn from(body: OptionalJson) -> Self {
        Self {
            message: body.text("message").unwrap_or_default(),
            chat_type: body.text("chatType"),
        }
    }
}

// The blog editor sends `prompt`; other clients send `topic`.
#[derive(Debug)]
struct TopicRequest {
    topic: String,
    title: Option<String>,
}

impl From<OptionalJson> for TopicRequest {
    fn from(body: OptionalJson) -> Self {
        Self {
            topic: body
                .text("topic")
                .or_else(|| body.text("prompt"))
                .unwrap_or_default(),
            title: body.text("title"),
        }
    }
}

#[derive(Debug, Serialize)]
struct IdeasResponse {
    ideas: Vec<String>,
}

// GET /api/ai/chats
async fn list_chats(
    State(state): State<AppState>,
) -> Result<Json<Vec<InteractionRecord>>, ApiError> {
    Ok(Json(state.assistant.chat_history().await?))
}

// POST /api/ai/chat
async fn submit_chat(
    State(state): State<AppState>,
    body: OptionalJson,
) -> Result<Json<InteractionRecord>, ApiError> {
    let request = ChatRequest::from(body);
    let record = state
        .assistant
        .submit_chat(&request.message, request.chat_type.as_deref())
        .await?;
    Ok(Json(record))
}

// POST /api/ai/content-ideas
async fn content_ideas(State(state): State<AppState>, body: OptionalJson) -> Json<IdeasResponse> {
    let request = TopicRequest::from(body);
    let ideas = state.assistant.content_ideas(&request.topic).await;
    Json(IdeasResponse { ideas })
}

// POST /api/blogs/generate
async fn generate_blog(State(state): State<AppState>, body: OptionalJson) -> Json<GeneratedBlog> {
    let request = TopicRequest::from(body);
    let blog = state
        .assistant
        .generate_blog(&request.topic, request.title.as_deref())
        .await;
    Json(blog)
}

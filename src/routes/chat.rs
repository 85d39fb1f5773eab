use axum::{Json, extract::State};
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello from FastAPI" }))
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let outcome = generate_reply(
        &state.conversation,
        state.completions.as_ref(),
        &payload.message,
    )
    .await?;

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        conversation: outcome.conversation,
    }))
}

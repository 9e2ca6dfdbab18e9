//! Chat route.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::chat::ChatError;
use crate::services::persona::Persona;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub persona: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
#[error("prompt must not be empty")]
pub struct EmptyPrompt;

impl crate::error::ErrorCode for EmptyPrompt {
    fn error_code(&self) -> &'static str {
        "E_EMPTY_PROMPT"
    }
}

impl crate::error::ErrorCode for JsonRejection {
    fn error_code(&self) -> &'static str {
        "E_BAD_REQUEST"
    }
}

/// `POST /api/chat` — answer one question about the whiteboard.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::from_error(StatusCode::BAD_REQUEST, &e))?;
    if req.prompt.trim().is_empty() {
        return Err(ApiError::from_error(StatusCode::BAD_REQUEST, &EmptyPrompt));
    }
    let context = req.context.as_deref().unwrap_or_default();

    let answer = match req.persona.as_deref() {
        Some(raw) => {
            let persona = raw
                .parse::<Persona>()
                .map_err(|e| ApiError::from_error(StatusCode::BAD_REQUEST, &e))?;
            state.chat.respond_as(persona, &req.prompt, context).await
        }
        None => state.chat.respond(&req.prompt, context).await,
    };
    let text = answer.map_err(chat_error_to_api)?;
    Ok(Json(ChatReply { text }))
}

fn chat_error_to_api(err: ChatError) -> ApiError {
    let status = match err {
        ChatError::Configuration => StatusCode::SERVICE_UNAVAILABLE,
        ChatError::EmptyResponse | ChatError::Upstream => StatusCode::BAD_GATEWAY,
    };
    ApiError::with_message(status, &err, err.user_message())
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

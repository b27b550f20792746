//! Axum handler for the assistant endpoint.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chat::fallback::{fallback_reply, ChatTurn};
use crate::chat::prompts::ASSISTANT_SYSTEM;
use crate::errors::AppError;
use crate::search::enrichment::strip_think_blocks;
use crate::state::AppState;

/// Replies stay short; the cap matches the "brief, friendly" instruction.
const ASSISTANT_MAX_TOKENS: u32 = 50;

/// Reported as the producing backend when the model call fails.
const FALLBACK_MODEL: &str = "rule-based-fallback";

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub success: bool,
    pub response: AssistantReply,
}

#[derive(Debug, Serialize)]
pub struct AssistantReply {
    pub message: String,
    pub timestamp: String,
    /// Which backend actually produced the text.
    pub model: String,
}

/// POST /api/assistant/chat
///
/// One model attempt; on any failure the deterministic intent table answers
/// instead. Model trouble is logged, never surfaced.
pub async fn handle_assistant_chat(
    State(state): State<AppState>,
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let (message, model) = match state
        .chat
        .chat(ASSISTANT_SYSTEM, &request.message, ASSISTANT_MAX_TOKENS)
        .await
    {
        Ok(reply) => {
            let cleaned = strip_think_blocks(&reply);
            if cleaned.is_empty() {
                warn!("assistant reply empty after cleanup, using fallback");
                (
                    fallback_reply(&request.message, &request.conversation_history),
                    FALLBACK_MODEL.to_string(),
                )
            } else {
                (cleaned, state.chat.model().to_string())
            }
        }
        Err(e) => {
            warn!("assistant model call failed, using fallback: {e}");
            (
                fallback_reply(&request.message, &request.conversation_history),
                FALLBACK_MODEL.to_string(),
            )
        }
    };

    Ok(Json(AssistantResponse {
        success: true,
        response: AssistantReply {
            message,
            timestamp: Utc::now().to_rfc3339(),
            model,
        },
    }))
}

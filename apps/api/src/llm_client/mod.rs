//! Chat model client — the single point of entry for all model calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the model host directly.
//! Enrichment and the assistant endpoint both go through this client.
//!
//! The backend is an Ollama-compatible chat endpoint. One attempt per call,
//! no retries; every caller has a deterministic local fallback. The client
//! carries its own timeout, separate from any request-level deadline.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Sampling temperature for every call. The model reformats deterministic
/// text; keep sampling low.
const TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model host returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Thin chat client over an Ollama host. Cheap to clone; the underlying
/// `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    chat_url: String,
    model: String,
}

impl ChatClient {
    /// `timeout` bounds the whole call including connection setup. A timeout
    /// is reported as `ChatError::Http` and handled like any other failure.
    pub fn new(base_url: &str, model: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("failed to build HTTP client"),
            chat_url: format!("{}/api/chat", base_url.trim_end_matches('/')),
            model,
        }
    }

    /// The model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one system + user message pair and returns the reply text.
    pub async fn chat(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String, ChatError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            stream: false,
            options: ChatOptions {
                temperature: TEMPERATURE,
                num_predict: max_tokens,
            },
        };

        let response = self.client.post(&self.chat_url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChatError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .message
            .map(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(ChatError::EmptyContent)?;

        debug!("chat call succeeded ({} chars)", content.len());
        Ok(content)
    }
}

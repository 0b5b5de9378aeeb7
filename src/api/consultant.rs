//! Chat-completion proxy endpoint.
//!
//! A stateless pass-through: shapes the browser's request for the upstream
//! chat-completions API, injects the bearer credential, and returns the
//! first choice's content alongside the raw upstream body. No retries, no
//! streaming, no caching.

use std::env;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::state::AppState;

use super::error::ApiError;

/// Upstream chat-completions endpoint.
pub const CHAT_COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Environment variable holding the chat API credential, read per request.
pub const CHAT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

const DEFAULT_MODEL: &str = "openai/gpt-oss-20b:free";
const DEFAULT_TEMPERATURE: f64 = 0.7;

/// One chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body for POST /api/consultant.
#[derive(Debug, Deserialize)]
pub struct ConsultantRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub model: Option<String>,
    pub system: Option<String>,
    pub temperature: Option<f64>,
}

/// Response body: extracted content plus the untouched upstream payload.
#[derive(Debug, Serialize)]
pub struct ConsultantResponse {
    pub content: String,
    pub raw: Value,
}

/// Handle POST /api/consultant.
pub async fn consultant_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConsultantRequest>,
) -> Result<Json<ConsultantResponse>, ApiError> {
    if request.messages.is_empty() {
        return Err(ApiError::BadRequest("messages[] is required".to_string()));
    }

    let api_key =
        env::var(CHAT_API_KEY_ENV).map_err(|_| ApiError::MissingCredential(CHAT_API_KEY_ENV))?;

    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    if let Some(system) = request.system {
        messages.push(ChatMessage {
            role: "system".to_string(),
            content: system,
        });
    }
    messages.extend(request.messages);

    let payload = json!({
        "model": request.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        "messages": messages,
        "temperature": request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
    });

    debug!(url = CHAT_COMPLETIONS_URL, "forwarding consultant request");

    let response = state
        .http
        .post(CHAT_COMPLETIONS_URL)
        .bearer_auth(&api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if !response.status().is_success() {
        let details = response.text().await.unwrap_or_default();
        return Err(ApiError::Upstream(details));
    }

    let raw: Value = response
        .json()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let content = extract_content(&raw);

    Ok(Json(ConsultantResponse { content, raw }))
}

/// Pulls the first choice's message content, falling back to streaming-style
/// delta content, then the empty string.
fn extract_content(raw: &Value) -> String {
    let choice = &raw["choices"][0];
    choice["message"]["content"]
        .as_str()
        .or_else(|| choice["delta"]["content"].as_str())
        .unwrap_or_default()
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================

// src/llm/openai_compat/response.rs
// OpenAI-compatible chat response parsing

use crate::error::{ConsultError, Result};
use crate::llm::{ChatResult, Usage};
use serde::Deserialize;

/// Non-streaming chat response (OpenAI-compatible format)
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ResponseChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Parse an OpenAI-compatible chat response into a ChatResult.
/// Only the first choice is kept.
pub fn parse_chat_response(
    response_body: &str,
    request_id: &str,
    duration_ms: u64,
) -> Result<ChatResult> {
    let data: ChatResponse = serde_json::from_str(response_body).map_err(|e| {
        ConsultError::MalformedResponse(format!("failed to parse chat response: {}", e))
    })?;

    let (content, finish_reason) = match data.choices.into_iter().next() {
        Some(c) => (c.message.content, c.finish_reason),
        None => (None, None),
    };

    Ok(ChatResult {
        request_id: request_id.to_owned(),
        content,
        finish_reason,
        usage: data.usage,
        duration_ms,
    })
}

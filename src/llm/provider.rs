// src/llm/provider.rs
// LLM client abstraction layer

use crate::error::Result;
use async_trait::async_trait;

use super::{ChatResult, Message};

/// Trait for LLM clients. The response service only talks to this.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one chat completion request. No retries.
    async fn chat(&self, messages: Vec<Message>) -> Result<ChatResult>;

    /// Model the client sends requests to
    fn model_name(&self) -> String;
}

// src/llm/mod.rs
// LLM inference clients

mod http_client;
mod logging;
mod openai;
mod openai_compat;
mod provider;
mod types;

pub use openai::OpenAiClient;
pub use provider::LlmClient;
pub use types::{ChatResult, Message, Usage};

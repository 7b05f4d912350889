// src/service.rs
// Response service: one persona-framed question in, one answer out

use crate::error::{ConsultError, Result};
use crate::llm::{LlmClient, Message};
use crate::persona::Persona;
use crate::query::Query;
use std::sync::Arc;
use tracing::{info, warn};

/// Stateless consultation service. Each call is an independent request:
/// no history, no cache, no retries.
#[derive(Clone)]
pub struct ResponseService {
    client: Arc<dyn LlmClient>,
}

impl ResponseService {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// The exchange sent to the model: the persona's instruction, then the question
    pub fn build_messages(persona: Persona, user_text: &str) -> Vec<Message> {
        vec![
            Message::system(persona.system_prompt()),
            Message::user(user_text),
        ]
    }

    /// Ask `persona` the question and return the model's text verbatim.
    ///
    /// The text is not validated here; blank input is a presentation concern
    /// (see [`Query`]).
    pub async fn respond(&self, user_text: &str, persona: Persona) -> Result<String> {
        let messages = Self::build_messages(persona, user_text);

        let result = self.client.chat(messages).await.inspect_err(|e| {
            warn!(persona = %persona, kind = %e.kind(), error = %e, "Consultation failed");
        })?;

        let content = result.content.ok_or_else(|| {
            ConsultError::MalformedResponse("response contained no message content".to_string())
        })?;

        info!(
            persona = %persona,
            request_id = %result.request_id,
            duration_ms = result.duration_ms,
            "Consultation answered"
        );
        Ok(content)
    }

    /// Same as [`respond`](Self::respond) but always yields displayable text:
    /// failures come back as "An error occurred: ..."
    pub async fn get_response(&self, user_text: &str, persona: Persona) -> String {
        match self.respond(user_text, persona).await {
            Ok(text) => text,
            Err(e) => e.to_user_string(),
        }
    }

    /// Answer a validated query
    pub async fn answer(&self, query: &Query) -> Result<String> {
        self.respond(query.text(), query.persona()).await
    }

    pub fn model_name(&self) -> String {
        self.client.model_name()
    }
}

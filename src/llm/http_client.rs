// src/llm/http_client.rs
// HTTP execution for LLM providers: one attempt, failures classified

use crate::error::{ConsultError, Result};
use reqwest::Client;
use tracing::warn;

/// Longest provider error body kept in an error message
const MAX_ERROR_BODY_CHARS: usize = 2000;

/// Thin wrapper over a shared reqwest client for provider calls
pub struct LlmHttpClient {
    client: Client,
}

impl LlmHttpClient {
    /// Create from an existing reqwest::Client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// POST a JSON body with Bearer auth and return the response body.
    ///
    /// Exactly one attempt is made. Transport failures become `Network`,
    /// non-2xx statuses become `ProviderRejected`.
    pub async fn execute(
        &self,
        request_id: &str,
        url: &str,
        api_key: &str,
        body: String,
    ) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(request_id = %request_id, error = %e, "Request failed");
                ConsultError::from(e)
            })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(
                request_id = %request_id,
                status = %status,
                "Provider rejected request"
            );
            return Err(ConsultError::ProviderRejected {
                status: status.as_u16(),
                body: truncate_body(&text),
            });
        }

        Ok(text)
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

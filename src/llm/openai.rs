// src/llm/openai.rs
// OpenAI chat-completions client (non-streaming)

use crate::config::OpenAiSettings;
use crate::error::Result;
use crate::llm::http_client::LlmHttpClient;
use crate::llm::openai_compat::{ChatRequest, parse_chat_response};
use crate::llm::provider::LlmClient;
use crate::llm::{ChatResult, Message};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

/// OpenAI API client
pub struct OpenAiClient {
    settings: OpenAiSettings,
    http: LlmHttpClient,
}

impl OpenAiClient {
    /// Create a client from readiness-checked settings and a shared reqwest client
    pub fn new(settings: OpenAiSettings, client: reqwest::Client) -> Self {
        Self {
            settings,
            http: LlmHttpClient::from_client(client),
        }
    }

    #[instrument(skip(self, messages), fields(request_id, model = %self.settings.model, message_count = messages.len()))]
    pub async fn chat(&self, messages: Vec<Message>) -> Result<ChatResult> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", &request_id);

        info!(
            request_id = %request_id,
            message_count = messages.len(),
            model = %self.settings.model,
            "Starting OpenAI chat request"
        );

        let request = ChatRequest::new(&self.settings.model, messages)
            .with_temperature(self.settings.temperature);

        let body = serde_json::to_string(&request)?;
        debug!(request_id = %request_id, "OpenAI request: {}", body);

        let response_body = self
            .http
            .execute(
                &request_id,
                &self.settings.chat_completions_url(),
                &self.settings.api_key,
                body,
            )
            .await?;

        let duration_ms = start_time.elapsed().as_millis() as u64;

        let result = parse_chat_response(&response_body, &request_id, duration_ms)?;

        if let Some(ref u) = result.usage {
            crate::llm::logging::log_usage(&request_id, "OpenAI", u);
        }

        crate::llm::logging::log_completion(
            &request_id,
            "OpenAI",
            duration_ms,
            result.content.as_ref().map(|c| c.len()).unwrap_or(0),
            result.finish_reason.as_deref(),
        );

        Ok(result)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat(&self, messages: Vec<Message>) -> Result<ChatResult> {
        self.chat(messages).await
    }

    fn model_name(&self) -> String {
        self.settings.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsultError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Read one HTTP request off the socket: headers plus Content-Length body
    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    /// Serve exactly one request with the given status and body, handing the raw
    /// request back to the test
    async fn mock_provider(status: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let resp = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(resp.as_bytes()).await.unwrap();
            let _ = tx.send(request);
        });

        (format!("http://127.0.0.1:{}/v1", port), rx)
    }

    fn client_for(base_url: &str) -> OpenAiClient {
        OpenAiClient::new(
            OpenAiSettings::new("sk-test", base_url),
            reqwest::Client::new(),
        )
    }

    #[tokio::test]
    async fn test_chat_sends_model_temperature_and_messages() {
        let body = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Use reversed()."}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 20, "completion_tokens": 4, "total_tokens": 24}
        })
        .to_string();
        let (base_url, request_rx) = mock_provider("200 OK", body).await;
        let client = client_for(&base_url);

        let result = client
            .chat(vec![
                Message::system("You are an engineer."),
                Message::user("How do I reverse a list?"),
            ])
            .await
            .unwrap();
        assert_eq!(result.content.as_deref(), Some("Use reversed()."));
        assert_eq!(result.finish_reason.as_deref(), Some("stop"));

        let request = request_rx.await.unwrap();
        assert!(request.starts_with("POST /v1/chat/completions "));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));

        let json_start = request.find("\r\n\r\n").unwrap() + 4;
        let sent: serde_json::Value = serde_json::from_str(&request[json_start..]).unwrap();
        assert_eq!(sent["model"], "gpt-4o-mini");
        assert!((sent["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(sent["messages"][0]["role"], "system");
        assert_eq!(sent["messages"][0]["content"], "You are an engineer.");
        assert_eq!(sent["messages"][1]["role"], "user");
        assert_eq!(sent["messages"][1]["content"], "How do I reverse a list?");
    }

    #[tokio::test]
    async fn test_chat_maps_401_to_provider_rejected() {
        let body = r#"{"error":{"message":"Incorrect API key provided"}}"#.to_string();
        let (base_url, _rx) = mock_provider("401 Unauthorized", body).await;
        let err = client_for(&base_url)
            .chat(vec![Message::user("hi")])
            .await
            .unwrap_err();
        match err {
            ConsultError::ProviderRejected { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Incorrect API key provided"));
            }
            other => panic!("expected ProviderRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chat_maps_garbage_to_malformed() {
        let (base_url, _rx) = mock_provider("200 OK", "<html>oops</html>".to_string()).await;
        let err = client_for(&base_url)
            .chat(vec![Message::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, ConsultError::MalformedResponse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_chat_unreachable_is_network_error() {
        let err = client_for("http://127.0.0.1:1/v1")
            .chat(vec![Message::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, ConsultError::Network(_)), "got {err:?}");
    }

    #[test]
    fn test_model_name() {
        let client = client_for("http://localhost/v1");
        assert_eq!(LlmClient::model_name(&client), "gpt-4o-mini");
    }
}

// tests/common/mod.rs
// Shared helpers: a scripted LLM client and a router built around it

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use consult::error::{ConsultError, Result};
use consult::llm::{ChatResult, LlmClient, Message};
use consult::service::ResponseService;
use consult::web::{create_router, state::AppState};
use http_body_util::BodyExt;
use std::sync::{Arc, Mutex};

pub enum Reply {
    Text(&'static str),
    Fail(fn() -> ConsultError),
}

/// LLM client that records requests and answers from a script
pub struct FakeLlm {
    reply: Reply,
    pub calls: Mutex<Vec<Vec<Message>>>,
}

impl FakeLlm {
    pub fn answering(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: fn() -> ConsultError) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(err),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for FakeLlm {
    async fn chat(&self, messages: Vec<Message>) -> Result<ChatResult> {
        self.calls.lock().unwrap().push(messages);
        match &self.reply {
            Reply::Text(text) => Ok(ChatResult {
                request_id: "fake".into(),
                content: Some(text.to_string()),
                finish_reason: Some("stop".into()),
                usage: None,
                duration_ms: 0,
            }),
            Reply::Fail(make) => Err(make()),
        }
    }

    fn model_name(&self) -> String {
        "gpt-4o-mini".into()
    }
}

pub fn router_with(llm: Arc<FakeLlm>) -> Router {
    let state = AppState::new(ResponseService::new(llm)).unwrap();
    create_router(state)
}

pub fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

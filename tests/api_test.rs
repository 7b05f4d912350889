// tests/api_test.rs
// JSON API: personas, ask, health

mod common;

use axum::http::StatusCode;
use common::{FakeLlm, body_string, get, json_post, router_with};
use consult::error::ConsultError;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn json_body(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = router_with(FakeLlm::answering("unused"));
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_list_personas() {
    let app = router_with(FakeLlm::answering("unused"));
    let response = app.oneshot(get("/api/personas")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec!["doctor", "lawyer", "software_engineer", "culinary_expert"]
    );
    assert_eq!(body[2]["name"], "Software Engineer");
}

#[tokio::test]
async fn test_ask_returns_model_text_verbatim() {
    let llm = FakeLlm::answering("  Reverse with `xs.reverse()`.\n");
    let app = router_with(llm.clone());

    let response = app
        .oneshot(json_post(
            "/api/ask",
            json!({"persona": "Software Engineer", "question": "How do I reverse a list?"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["persona"], "Software Engineer");
    assert_eq!(body["answer"], "  Reverse with `xs.reverse()`.\n");
    assert!(body.get("error_kind").is_none());
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn test_ask_blank_question_is_unprocessable() {
    let llm = FakeLlm::answering("unused");
    let app = router_with(llm.clone());

    let response = app
        .oneshot(json_post("/api/ask", json!({"persona": "doctor", "question": " \t "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["kind"], "invalid_input");
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_ask_unknown_persona_is_bad_request() {
    let llm = FakeLlm::answering("unused");
    let app = router_with(llm.clone());

    let response = app
        .oneshot(json_post("/api/ask", json!({"persona": "Plumber", "question": "Leak?"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("Plumber"));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_ask_failure_is_rendered_with_kind() {
    let llm = FakeLlm::failing(|| ConsultError::Network("connection reset by peer".into()));
    let app = router_with(llm);

    let response = app
        .oneshot(json_post("/api/ask", json!({"persona": "lawyer", "question": "Is this legal?"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let answer = body["answer"].as_str().unwrap();
    assert!(answer.starts_with("An error occurred: "));
    assert!(answer.contains("connection reset by peer"));
    assert_eq!(body["error_kind"], "network");
}

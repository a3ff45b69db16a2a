//! Ask and feedback surface every non-success response as an error.

use arena_client::{ApiError, ArenaClient, ClientConfig};
use arena_core::enums::{AgentId, FeedbackLabel};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ArenaClient {
    ArenaClient::new(ClientConfig::new(server.uri())).expect("client builds")
}

#[tokio::test]
async fn ask_returns_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .and(body_json(serde_json::json!({
            "question": "What is 2+2? Answer in one sentence.",
            "user_id": "uid_7"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "agent_a": {"model": "openai/gpt-3.5-turbo", "answer": "It is 4."},
            "agent_b": {"model": "gemini-flash-latest", "answer": "2 + 2 = 4."},
            "referee": {"model": "gemini-flash-latest", "chosen_agent": "agent_a"},
            "enhanced_answer": {"model": "gemini-flash-latest", "answer": "Two plus two is four."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .ask_question("What is 2+2? Answer in one sentence.", Some("uid_7"))
        .await
        .expect("ask succeeds");
    assert_eq!(resp.chosen_agent(), Some(AgentId::AgentA));
    assert_eq!(resp.enhanced_answer(), Some("Two plus two is four."));
}

#[tokio::test]
async fn ask_keeps_unfamiliar_success_body_verbatim() {
    let body = serde_json::json!({
        "agent_a": {"model": "openai/gpt-3.5-turbo", "answer": "Four.", "latency_ms": 12},
        "agent_b": "unavailable",
        "referee": {
            "model": "gemini-flash-latest",
            "chosen_agent": "tie",
            "scores": {"correctness": 8.5, "clarity": 9, "usefulness": 7.25}
        },
        "enhanced_answer": {"model": "gemini-flash-latest", "answer": "Four."},
        "trace_id": "abc123"
    });
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .ask_question("What is 2+2?", None)
        .await
        .expect("any 2xx body is accepted");
    assert_eq!(resp.chosen_agent(), None);
    assert_eq!(resp.enhanced_answer(), Some("Four."));
    assert_eq!(serde_json::to_value(&resp).unwrap(), body);
}

#[tokio::test]
async fn ask_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(503).set_body_string("models overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .ask_question("Hello?", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 503, .. }));
    let message = err.to_string();
    assert!(message.contains("503"), "message was: {message}");
    assert!(message.contains("models overloaded"), "message was: {message}");
}

#[tokio::test]
async fn submit_label_succeeds_on_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .and(body_json(serde_json::json!({"turn_id": 42, "label": "disagree"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .submit_label(42, FeedbackLabel::Disagree)
        .await
        .expect("feedback accepted");
}

#[tokio::test]
async fn submit_label_server_error_mentions_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .and(body_json(serde_json::json!({"turn_id": 42, "label": "agree"})))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit_label(42, FeedbackLabel::Agree)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn submit_label_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/feedback"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit_label(1, FeedbackLabel::Agree)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("429"));
}

// libs/optimizer-cell/tests/openai_test.rs

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use optimizer_cell::{AppointmentSuggester, OpenAiSuggester, SuggestionError, SuggestionRequest};
use shared_utils::test_utils::TestConfig;

async fn suggester_for(server: &MockServer) -> OpenAiSuggester {
    let config = TestConfig::default()
        .with_ai_base_url(&format!("{}/v1", server.uri()))
        .to_app_config();
    OpenAiSuggester::new(&config)
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_suggest_posts_chat_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(bearer_token("test-ai-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "response_format": { "type": "json_object" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            r#"{"suggestedTimes":["Monday 2:00 PM","Wednesday 2:30 PM"],"reasoning":"Afternoons match the preference."}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let suggester = suggester_for(&server).await;
    let response = suggester.suggest(&SuggestionRequest::sample()).await.unwrap();

    assert_eq!(response.suggested_times, vec!["Monday 2:00 PM", "Wednesday 2:30 PM"]);
    assert_eq!(response.reasoning, "Afternoons match the preference.");
}

#[tokio::test]
async fn test_upstream_error_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let suggester = suggester_for(&server).await;
    let result = suggester.suggest(&SuggestionRequest::sample()).await;

    assert_matches!(result, Err(SuggestionError::Upstream { status: 429, body }) if body == "rate limited");
}

#[tokio::test]
async fn test_malformed_output_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(r#"{"suggestedTimes":"Monday"}"#)))
        .mount(&server)
        .await;

    let suggester = suggester_for(&server).await;
    let result = suggester.suggest(&SuggestionRequest::sample()).await;

    assert_matches!(result, Err(SuggestionError::InvalidOutput(_)));
}

// Wire-format tests for the Gemini client against a mock HTTP server

use gemchat::provider::{GeminiClient, GenerationRequest, TextGenerator};
use serde_json::json;

fn request(prompt: &str) -> GenerationRequest {
    GenerationRequest {
        model: "gemini-1.5-flash".to_string(),
        prompt: prompt.to_string(),
        temperature: 0.7,
        top_p: 0.9,
        max_tokens: 512,
    }
}

fn client(server: &mockito::Server) -> GeminiClient {
    GeminiClient::new("test-key".to_string())
        .unwrap()
        .with_base_url(server.url())
}

#[tokio::test]
async fn generate_returns_first_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::UrlEncoded(
            "key".into(),
            "test-key".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Dreams are aspirations; goals are plans."}]
                    },
                    "finishReason": "STOP"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let reply = client(&server)
        .generate(&request("dreams vs goals?"))
        .await
        .unwrap();

    assert_eq!(reply, "Dreams are aspirations; goals are plans.");
    mock.assert_async().await;
}

#[tokio::test]
async fn generate_sends_camel_case_generation_config() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::UrlEncoded(
            "key".into(),
            "test-key".into(),
        ))
        .match_body(mockito::Matcher::PartialJson(json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": "Hello"}]
            }],
            "generationConfig": {
                "maxOutputTokens": 512
            }
        })))
        .with_status(200)
        .with_body(
            json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Hi"}]},
                    "finishReason": "STOP"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    client(&server).generate(&request("Hello")).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn generate_concatenates_multiple_parts() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "part one "}, {"text": "part two"}]
                    },
                    "finishReason": "STOP"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let reply = client(&server).generate(&request("Hello")).await.unwrap();
    assert_eq!(reply, "part one part two");
}

#[tokio::test]
async fn quota_fault_body_passes_through() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(429)
        .with_body("quota exceeded")
        .create_async()
        .await;

    let err = client(&server)
        .generate(&request("Hello"))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("quota exceeded"));
    assert!(message.contains("429"));
}

#[tokio::test]
async fn empty_candidates_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(json!({"candidates": []}).to_string())
        .create_async()
        .await;

    let err = client(&server)
        .generate(&request("Hello"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("no candidates"));
}

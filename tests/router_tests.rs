use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

use task_api_server::config::OpenAiConfig;
use task_api_server::core::error::AppError;
use task_api_server::features::completion::{
    CompletionGateway, CompletionProvider, OpenAiClient,
};
use task_api_server::server::{AppState, MAX_BODY_BYTES, build_router};

struct EchoProvider;

#[async_trait]
impl CompletionProvider for EchoProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        Ok(format!("echo: {prompt}"))
    }
}

fn router_with(provider: Arc<dyn CompletionProvider>) -> Router {
    build_router(AppState::new(Arc::new(CompletionGateway::new(provider))))
}

fn test_router() -> Router {
    router_with(Arc::new(EchoProvider))
}

fn openai_router(base_url: String, timeout_secs: u64) -> Router {
    let client = OpenAiClient::new(
        OpenAiConfig {
            api_key: "test-key".to_string(),
            base_url,
            model: "gpt-3.5-turbo".to_string(),
            timeout_secs,
        },
        true,
    )
    .unwrap();
    router_with(Arc::new(client))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn add_returns_total() {
    let response = test_router()
        .oneshot(post_json("/add", json!({ "a": "3", "b": "4" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(read_json(response).await, json!({ "total": 7 }));
}

#[tokio::test]
async fn add_with_invalid_operand_is_bad_request() {
    for body in [
        json!({ "a": "3", "b": "four" }),
        json!({ "a": "three", "b": "four" }),
    ] {
        let response = test_router().oneshot(post_json("/add", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json(response).await;
        assert!(payload["error"].as_str().unwrap().starts_with("invalid number"));
    }
}

#[tokio::test]
async fn add_rejects_numeric_json_and_unknown_fields() {
    for body in [
        json!({ "a": 3, "b": 4 }),
        json!({ "a": "3" }),
        json!({ "a": "3", "b": "4", "c": "5" }),
    ] {
        let response = test_router().oneshot(post_json("/add", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn total_returns_histogram() {
    let response = test_router()
        .oneshot(post_json("/total", json!({ "string": "aab" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "a": 2, "b": 1 }));
}

#[tokio::test]
async fn total_of_empty_string_is_empty_object() {
    let response = test_router()
        .oneshot(post_json("/total", json!({ "string": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({}));
}

#[tokio::test]
async fn total_counts_multibyte_characters() {
    let response = test_router()
        .oneshot(post_json("/total", json!({ "string": "ñañ" })))
        .await
        .unwrap();

    assert_eq!(read_json(response).await, json!({ "ñ": 2, "a": 1 }));
}

#[tokio::test]
async fn completion_returns_provider_reply() {
    let response = test_router()
        .oneshot(post_json(
            "/open_api_completion",
            json!({ "question": "hello" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "api_completion": "echo: hello" })
    );
}

#[tokio::test]
async fn completion_with_failing_provider_returns_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = openai_router(mock_server.uri(), 5)
        .oneshot(post_json(
            "/open_api_completion",
            json!({ "question": "hello" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "api_completion": "Please fix the error" })
    );
}

#[tokio::test]
async fn non_json_body_is_bad_request_on_every_endpoint() {
    for uri in ["/add", "/total", "/open_api_completion"] {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::from("definitely not json"))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let payload = read_json(response).await;
        assert!(payload["error"].as_str().unwrap().starts_with("bad request"));
    }
}

#[tokio::test]
async fn non_post_methods_are_rejected_uniformly() {
    for uri in ["/add", "/total", "/open_api_completion"] {
        for method in ["GET", "PUT", "DELETE", "PATCH"] {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();

            let response = test_router().oneshot(request).await.unwrap();

            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} {uri}"
            );
        }
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn completion_with_slow_provider_times_out_to_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "choices": [{ "message": { "role": "assistant", "content": "too late" } }]
                }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let response = openai_router(mock_server.uri(), 1)
        .oneshot(post_json(
            "/open_api_completion",
            json!({ "question": "hello" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "api_completion": "Please fix the error" })
    );
}

#[tokio::test]
async fn completion_with_unreachable_provider_returns_fallback() {
    let response = openai_router("http://127.0.0.1:1".to_string(), 1)
        .oneshot(post_json(
            "/open_api_completion",
            json!({ "question": "hello" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "api_completion": "Please fix the error" })
    );
}

#[tokio::test]
async fn body_over_limit_is_payload_too_large() {
    let oversized = "a".repeat(MAX_BODY_BYTES + 1);
    let response = test_router()
        .oneshot(post_json("/total", json!({ "string": oversized })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let payload = read_json(response).await;
    assert!(payload["error"].as_str().unwrap().starts_with("payload too large"));
}

#[tokio::test]
async fn large_body_under_limit_is_counted() {
    let input = "a".repeat(1_000_000);
    let response = test_router()
        .oneshot(post_json("/total", json!({ "string": input })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "a": 1_000_000 }));
}

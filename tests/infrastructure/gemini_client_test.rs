use std::time::Duration;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use medscribe::application::ports::{ReportError, ReportGenerator};
use medscribe::infrastructure::llm::GeminiClient;

async fn start_mock_gemini_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v1beta/models/gemini-2.0-flash-exp:generateContent",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn client(base_url: &str) -> GeminiClient {
    GeminiClient::new(
        "test-key".to_string(),
        Some(base_url.to_string()),
        Some("gemini-2.0-flash-exp".to_string()),
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn given_transcript_when_gemini_responds_then_returns_note_text() {
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"**Subjective (S):** headache"}]}}]}"#;
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, body).await;

    let result = client(&base_url).generate("patient reports headache").await;

    assert_eq!(result.unwrap(), "**Subjective (S):** headache");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_blank_transcript_then_fails_locally_without_remote_call() {
    // Unroutable endpoint: if a request were attempted, the error would be
    // an api failure, not the local validation failure.
    let client = client("http://127.0.0.1:1");

    let result = client.generate("   \n\t ").await;

    assert!(matches!(result, Err(ReportError::EmptyTranscript)));
}

#[tokio::test]
async fn given_gemini_returns_whitespace_only_text_then_returns_empty_output() {
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"   \n"}]}}]}"#;
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, body).await;

    let result = client(&base_url).generate("patient reports headache").await;

    assert!(matches!(result, Err(ReportError::EmptyOutput)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_gemini_returns_no_candidates_then_returns_empty_output() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, r#"{"candidates":[]}"#).await;

    let result = client(&base_url).generate("patient reports headache").await;

    assert!(matches!(result, Err(ReportError::EmptyOutput)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_gemini_returns_error_status_then_returns_api_error() {
    let (base_url, shutdown_tx) =
        start_mock_gemini_server(429, r#"{"error":{"message":"rate limited"}}"#).await;

    let result = client(&base_url).generate("patient reports headache").await;

    match result {
        Err(ReportError::ApiRequestFailed(msg)) => assert!(msg.contains("429")),
        other => panic!("expected api failure, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_multiple_parts_then_text_is_concatenated() {
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"**Subjective"},{"text":" (S):** headache"}]}}]}"#;
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, body).await;

    let result = client(&base_url).generate("patient reports headache").await;

    assert_eq!(result.unwrap(), "**Subjective (S):** headache");
    shutdown_tx.send(()).ok();
}

// Integration tests for the request executor against a mock endpoint

use crate::helpers::{COMPLETIONS_PATH, TEST_TOKEN, completion_envelope, config_for, test_key};

use flash_core::FlashConfig;
use flash_core::chat_client::{ChatClient, ResponseBuffer};
use flash_core::prompt::PROMPT_PREAMBLE;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the executor sends the exact method, path, headers and JSON body.
///
/// **WHY THIS MATTERS**: The endpoint rejects anything else. This is the whole outbound
/// contract in one assertion.
///
/// **BUG THIS CATCHES**: Would catch a missing bearer prefix, a wrong content type, or a
/// payload shape change.
#[tokio::test]
async fn given_prompt_when_sent_then_request_matches_wire_contract() {
    // GIVEN: A mock endpoint that only answers the exact expected request
    let server = MockServer::start().await;
    let prompt = format!("{PROMPT_PREAMBLE}# Notes");
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("content-type", "application/json"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(body_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": prompt}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_envelope("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(&config_for(&server), test_key()).unwrap();
    let mut buffer = ResponseBuffer::new();

    // WHEN: Sending
    let status = client.send(&prompt, &mut buffer).await.unwrap();

    // THEN: 200 and the full body accumulated
    assert_eq!(status.0, 200);
    let body: serde_json::Value = serde_json::from_slice(buffer.as_bytes()).unwrap();
    assert_eq!(body, completion_envelope("ok"));
}

/// **VALUE**: Verifies a large body is fully accumulated.
///
/// **BUG THIS CATCHES**: Would catch reading only the first chunk of a multi-chunk body.
#[tokio::test]
async fn given_large_response_when_sent_then_buffer_holds_every_byte() {
    // GIVEN: A body far larger than a single transport chunk
    let server = MockServer::start().await;
    let big = "x".repeat(512 * 1024);
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(big.clone()))
        .mount(&server)
        .await;

    let client = ChatClient::new(&config_for(&server), test_key()).unwrap();
    let mut buffer = ResponseBuffer::new();

    // WHEN: Sending
    client.send("p", &mut buffer).await.unwrap();

    // THEN: Every byte arrived in order
    assert_eq!(buffer.len(), big.len());
    assert_eq!(buffer.as_text().unwrap(), big);
}

/// **VALUE**: Verifies 4xx/5xx statuses are passed through as transport success.
///
/// **WHY THIS MATTERS**: The executor only reports transport failures. Interpreting the
/// status belongs to the envelope step, which can word it properly.
#[tokio::test]
async fn given_error_status_when_sent_then_returns_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"error": {"message": "Rate limit reached"}})),
        )
        .mount(&server)
        .await;

    let client = ChatClient::new(&config_for(&server), test_key()).unwrap();
    let mut buffer = ResponseBuffer::new();

    let status = client.send("p", &mut buffer).await.unwrap();

    assert_eq!(status.0, 429);
    assert!(buffer.as_text().unwrap().contains("Rate limit reached"));
}

/// **VALUE**: Verifies a refused connection is a transport error flagged as such.
///
/// **BUG THIS CATCHES**: Would catch transport failures being mapped to some other kind,
/// or being swallowed into an empty buffer.
#[tokio::test]
async fn given_unreachable_endpoint_when_sent_then_returns_transport_error() {
    // GIVEN: A port that was bound then released, so nothing listens on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let config = FlashConfig {
        endpoint_url: format!("http://127.0.0.1:{port}{COMPLETIONS_PATH}"),
        ..FlashConfig::default()
    };

    let client = ChatClient::new(&config, test_key()).unwrap();
    let mut buffer = ResponseBuffer::new();

    // WHEN: Sending
    let result = client.send("p", &mut buffer).await;

    // THEN: Transport error, nothing buffered
    let err = result.expect_err("must fail");
    assert!(err.is_connection(), "expected connection failure, got {err}");
    assert!(err.to_string().contains("Transport Error"));
    assert!(buffer.is_empty());
}

#[tokio::test]
async fn given_slow_endpoint_and_timeout_when_sent_then_returns_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_secs(3))
                .set_body_json(completion_envelope("late")),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.timeout_secs = Some(1);
    let client = ChatClient::new(&config, test_key()).unwrap();
    let mut buffer = ResponseBuffer::new();

    let err = client.send("p", &mut buffer).await.expect_err("must time out");

    assert!(err.is_timeout(), "expected timeout, got {err}");
}

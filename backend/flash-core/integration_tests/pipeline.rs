// End-to-end pipeline tests: notes in, flashcards out, against a mock endpoint

use crate::helpers::{completion_envelope, config_for, test_key};

use flash_core::error::{EnvelopeError, FlashError};
use flash_core::{FailureKind, FlashCard, FlashConfig, FlashcardPipeline};

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_answering(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

/// **VALUE**: Runs the reference completion through the full pipeline.
///
/// **WHY THIS MATTERS**: This is the product: markdown goes in, ordered Q/A cards come out.
///
/// **BUG THIS CATCHES**: Would catch any step (unwrap, either extractor pass, assembly)
/// drifting from the others.
#[tokio::test]
async fn given_well_formed_completion_when_generated_then_returns_paired_cards() {
    // GIVEN: An endpoint returning two Q/A pairs
    let server = server_answering(ResponseTemplate::new(200).set_body_json(completion_envelope(
        "Q: What is 2+2?A: 4\nQ: What is the capital of France?A: Paris\n",
    )))
    .await;
    let pipeline = FlashcardPipeline::new(&config_for(&server), test_key()).unwrap();

    // WHEN: Generating from some notes
    let cards = pipeline.generate("# Maths\n2+2=4\n# Geography\nParis").await.unwrap();

    // THEN: Two cards, paired positionally
    assert_eq!(
        cards,
        vec![
            FlashCard::new("What is 2+2", "4"),
            FlashCard::new("What is the capital of France", "Paris"),
        ]
    );
}

/// **VALUE**: Verifies empty notes fail before any request is issued.
///
/// **BUG THIS CATCHES**: Would catch the emptiness check moving after the network call,
/// which spends tokens on nothing.
#[tokio::test]
async fn given_empty_notes_when_generated_then_fails_without_request() {
    // GIVEN: An endpoint that must never be called
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let pipeline = FlashcardPipeline::new(&config_for(&server), test_key()).unwrap();

    // WHEN: Generating from empty notes
    let err = pipeline.generate("").await.expect_err("must fail");

    // THEN: EmptyInput
    assert_eq!(err.kind(), FailureKind::EmptyInput);
    server.verify().await;
}

/// **VALUE**: Verifies a count mismatch yields no cards at all.
///
/// **WHY THIS MATTERS**: Partial decks are never surfaced; extraction is all-or-nothing.
#[tokio::test]
async fn given_unbalanced_completion_when_generated_then_returns_mismatched_pairing() {
    // GIVEN: Two questions but only one answer marker
    let server = server_answering(ResponseTemplate::new(200).set_body_json(completion_envelope(
        "Q: First?A: one\nQ: Second?\n",
    )))
    .await;
    let pipeline = FlashcardPipeline::new(&config_for(&server), test_key()).unwrap();

    // WHEN: Generating
    let err = pipeline.generate("notes").await.expect_err("must fail");

    // THEN: MismatchedPairing
    assert_eq!(err.kind(), FailureKind::MismatchedPairing);
    assert!(err.to_string().contains("2 questions vs 1 answers"));
}

#[tokio::test]
async fn given_completion_without_markers_when_generated_then_returns_empty_deck() {
    let server = server_answering(
        ResponseTemplate::new(200).set_body_json(completion_envelope("I cannot help with that.")),
    )
    .await;
    let pipeline = FlashcardPipeline::new(&config_for(&server), test_key()).unwrap();

    let cards = pipeline.generate("notes").await.unwrap();

    assert!(cards.is_empty());
}

/// **VALUE**: Verifies an auth failure surfaces as a malformed response naming the status.
///
/// **BUG THIS CATCHES**: Would catch the 401 being reported as a bare missing field.
#[tokio::test]
async fn given_unauthorized_response_when_generated_then_reports_api_error() {
    // GIVEN: The endpoint rejects the key
    let server = server_answering(ResponseTemplate::new(401).set_body_json(json!({
        "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
    })))
    .await;
    let pipeline = FlashcardPipeline::new(&config_for(&server), test_key()).unwrap();

    // WHEN: Generating
    let err = pipeline.generate("notes").await.expect_err("must fail");

    // THEN: MalformedResponse kind, ApiError variant, status 401
    assert_eq!(err.kind(), FailureKind::MalformedResponse);
    match err {
        FlashError::Envelope(EnvelopeError::ApiError { status_code, message, .. }) => {
            assert_eq!(status_code.0, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn given_non_json_response_when_generated_then_reports_malformed_response() {
    let server =
        server_answering(ResponseTemplate::new(200).set_body_string("definitely not json")).await;
    let pipeline = FlashcardPipeline::new(&config_for(&server), test_key()).unwrap();

    let err = pipeline.generate("notes").await.expect_err("must fail");

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}

/// **VALUE**: Verifies configured markers replace the defaults end to end.
#[tokio::test]
async fn given_custom_markers_when_generated_then_uses_them() {
    let server = server_answering(ResponseTemplate::new(200).set_body_json(completion_envelope(
        "Question: Rust?|Answer: a language|",
    )))
    .await;
    let mut config = config_for(&server);
    config.markers.question_marker = "Question: ".to_string();
    config.markers.question_terminator = '?';
    config.markers.answer_marker = "Answer: ".to_string();
    config.markers.answer_terminator = '|';
    let pipeline = FlashcardPipeline::new(&config, test_key()).unwrap();

    let cards = pipeline.generate("notes").await.unwrap();

    assert_eq!(cards, vec![FlashCard::new("Rust", "a language")]);
}

#[test]
fn given_invalid_config_when_pipeline_built_then_returns_config_error() {
    let config = FlashConfig {
        endpoint_url: "not a url".to_string(),
        ..FlashConfig::default()
    };

    let result = FlashcardPipeline::new(&config, test_key());

    match result {
        Err(err) => assert_eq!(err.kind(), FailureKind::Config),
        Ok(_) => panic!("expected config error"),
    }
}

/// **VALUE**: Verifies consecutive calls each get a fresh buffer.
///
/// **BUG THIS CATCHES**: Would catch a buffer hoisted into the pipeline struct, where the
/// second response would be appended to the first and fail to parse.
#[tokio::test]
async fn given_two_sequential_calls_when_generated_then_each_parses_independently() {
    let server = server_answering(
        ResponseTemplate::new(200).set_body_json(completion_envelope("Q: Same?A: yes\n")),
    )
    .await;
    let pipeline = FlashcardPipeline::new(&config_for(&server), test_key()).unwrap();

    let first = pipeline.generate("one").await.unwrap();
    let second = pipeline.generate("two").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

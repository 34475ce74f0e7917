// Unit tests for error kinds and location tracking

use crate::error::{
    ChatClientError, CredentialError, EnvelopeError, FailureKind, FlashError, FlashcardError,
    PromptError,
};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies every error family maps to the failure kind shown to the user.
///
/// **WHY THIS MATTERS**: The CLI prints `error[<kind>]`. A wrong mapping sends users chasing
/// the wrong problem (network vs. key vs. model output).
#[test]
fn given_each_error_family_when_kind_requested_then_maps_to_failure_kind() {
    let location = ErrorLocation::from(Location::caller());
    let cases: Vec<(FlashError, FailureKind)> = vec![
        (
            CredentialError::missing("OPENAI_API_KEY").into(),
            FailureKind::MissingCredential,
        ),
        (PromptError::empty_input().into(), FailureKind::EmptyInput),
        (
            ChatClientError::Transport {
                message: "connection refused".to_string(),
                is_timeout: false,
                is_connection: true,
                location,
            }
            .into(),
            FailureKind::Transport,
        ),
        (
            ChatClientError::UrlParse {
                message: "relative URL without a base".to_string(),
                location,
            }
            .into(),
            FailureKind::Config,
        ),
        (
            ChatClientError::Json {
                message: "key must be a string".to_string(),
                location,
            }
            .into(),
            FailureKind::Config,
        ),
        (
            EnvelopeError::MissingContent {
                path: "choices",
                status_code: HttpStatusCode(200),
                location,
            }
            .into(),
            FailureKind::MalformedResponse,
        ),
        (
            FlashcardError::mismatched_pairing(3, 2).into(),
            FailureKind::MismatchedPairing,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.kind(), expected, "wrong kind for {err}");
    }
}

#[test]
fn given_failure_kind_when_displayed_then_uses_variant_name() {
    assert_eq!(FailureKind::MalformedResponse.to_string(), "MalformedResponse");
    assert_eq!(FailureKind::EmptyInput.as_str(), "EmptyInput");
}

/// **VALUE**: Verifies constructor helpers record where the error was raised.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the helpers, which
/// makes every location point into error/flashcard.rs.
#[test]
fn given_helper_constructor_when_called_then_location_points_at_caller() {
    let err = FlashcardError::mismatched_pairing(1, 0);

    let display = err.to_string();

    assert!(display.contains("Mismatched Pairing Error"));
    assert!(display.contains("1 questions vs 0 answers"));
    assert!(display.contains("tests/error.rs"), "location was: {display}");
}

#[test]
fn given_transport_error_when_flags_queried_then_reports_connection() {
    let err = ChatClientError::Transport {
        message: "refused".to_string(),
        is_timeout: false,
        is_connection: true,
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(err.is_connection());
    assert!(!err.is_timeout());
}

//! Errors raised while unwrapping the chat-completion envelope.
//!
//! All variants are the same failure kind (a malformed response). They
//! differ only in how much the body let us say about why.

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum EnvelopeError {
    #[error("Malformed Response Error: body is not valid UTF-8 (HTTP {status_code}): {message} {location}")]
    InvalidUtf8 {
        message: String,
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: body is not valid JSON (HTTP {status_code}): {message} {location}")]
    InvalidJson {
        message: String,
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: missing {path} (HTTP {status_code}) {location}")]
    MissingContent {
        path: &'static str,
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: endpoint answered HTTP {status_code}: {message} {location}")]
    ApiError {
        message: String,
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },
}

impl EnvelopeError {
    pub fn status_code(&self) -> HttpStatusCode {
        match self {
            EnvelopeError::InvalidUtf8 { status_code, .. }
            | EnvelopeError::InvalidJson { status_code, .. }
            | EnvelopeError::MissingContent { status_code, .. }
            | EnvelopeError::ApiError { status_code, .. } => *status_code,
        }
    }
}

use crate::chat_client::ResponseBuffer;
use crate::error::EnvelopeError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use log::{debug, warn};
use serde_json::Value;

/// Pull `choices[0].message.content` out of a finished response body.
///
/// `status` is the HTTP status the executor observed. It is only used to
/// word the error: a non-2xx body carrying `error.message` is reported as
/// [`EnvelopeError::ApiError`] instead of a bare missing-field failure.
///
/// # Errors
///
/// Returns [`EnvelopeError`] when the body is not UTF-8, not JSON, or lacks
/// a string at `choices[0].message.content`. There is no fallback.
pub fn unwrap_completion(
    buffer: &ResponseBuffer,
    status: HttpStatusCode,
) -> Result<String, EnvelopeError> {
    let text = buffer.as_text().map_err(|e| EnvelopeError::InvalidUtf8 {
        message: e.to_string(),
        status_code: status,
        location: ErrorLocation::from(Location::caller()),
    })?;

    let envelope: Value = serde_json::from_str(text).map_err(|e| {
        warn!("Response body is not JSON (HTTP {status}, {} bytes)", buffer.len());
        EnvelopeError::InvalidJson {
            message: e.to_string(),
            status_code: status,
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    match completion_content(&envelope) {
        Ok(content) => {
            debug!("Unwrapped completion: {} chars", content.chars().count());
            Ok(content.to_string())
        }
        Err(path) => {
            if !status.is_success() {
                if let Some(message) = api_error_message(&envelope) {
                    return Err(EnvelopeError::ApiError {
                        message: message.to_string(),
                        status_code: status,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
            Err(EnvelopeError::MissingContent {
                path,
                status_code: status,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

/// Walk the envelope, naming the first missing step on failure.
fn completion_content(envelope: &Value) -> Result<&str, &'static str> {
    let choices = envelope
        .get("choices")
        .and_then(Value::as_array)
        .ok_or("choices")?;
    let first = choices.first().ok_or("choices[0]")?;
    let message = first.get("message").ok_or("choices[0].message")?;
    message
        .get("content")
        .and_then(Value::as_str)
        .ok_or("choices[0].message.content")
}

fn api_error_message(envelope: &Value) -> Option<&str> {
    envelope
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
}

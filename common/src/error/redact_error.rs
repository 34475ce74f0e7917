use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when something tries to push a secret through serde.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Redaction Error: refusing to serialize {type_name}, read it with as_str() {location}")]
    SerializeRefused {
        type_name: &'static str,
        location: ErrorLocation,
    },
}

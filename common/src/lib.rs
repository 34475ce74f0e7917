//! Shared primitives for zflash.
//!
//! This crate holds the small value types every other crate leans on:
//! error locations, the redacted credential wrapper and HTTP status
//! helpers. Nothing in here performs I/O.
//!
//! ## Architecture
//!
//! - **common** (this crate): Plain value types
//! - **flash-core**: The notes → chat request → flashcards pipeline
//! - **zflash**: Command-line front end wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

pub mod chat_client;
pub mod config;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod flashcard;
pub mod pipeline;
pub mod prompt;

#[cfg(test)]
mod tests;

pub use chat_client::{ChatClient, ResponseBuffer};
pub use config::{FlashConfig, MarkerConfig};
pub use error::{FailureKind, FlashError};
pub use flashcard::FlashCard;
pub use pipeline::FlashcardPipeline;

pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_ENDPOINT_URL: &str =
    const_format::concatcp!(OPENAI_API_BASE_URL, "/v1/chat/completions");
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

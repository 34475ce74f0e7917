pub mod chat_client;
pub mod config;
pub mod credential;
pub mod envelope;
pub mod flashcard;
pub mod prompt;

pub use chat_client::ChatClientError;
pub use config::ConfigError;
pub use credential::CredentialError;
pub use envelope::EnvelopeError;
pub use flashcard::FlashcardError;
pub use prompt::PromptError;

use std::fmt::{Display, Formatter, Result as FormatResult};

use thiserror::Error;

/// Any failure of the notes → flashcards pipeline.
///
/// Every variant is fatal for the input being processed. Nothing in the
/// pipeline retries, and no partial flashcard list is ever returned next
/// to one of these.
#[derive(Debug, Error)]
pub enum FlashError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    ChatClient(#[from] ChatClientError),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Flashcard(#[from] FlashcardError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Coarse failure category, used for the terminal failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingCredential,
    EmptyInput,
    Transport,
    MalformedResponse,
    MismatchedPairing,
    Config,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredential => "MissingCredential",
            Self::EmptyInput => "EmptyInput",
            Self::Transport => "Transport",
            Self::MalformedResponse => "MalformedResponse",
            Self::MismatchedPairing => "MismatchedPairing",
            Self::Config => "Config",
        }
    }
}

impl Display for FailureKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.as_str())
    }
}

impl FlashError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FlashError::Credential(_) => FailureKind::MissingCredential,
            FlashError::Prompt(_) => FailureKind::EmptyInput,
            FlashError::ChatClient(e) => e.kind(),
            FlashError::Envelope(_) => FailureKind::MalformedResponse,
            FlashError::Flashcard(_) => FailureKind::MismatchedPairing,
            FlashError::Config(_) => FailureKind::Config,
        }
    }
}

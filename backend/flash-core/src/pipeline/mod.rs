//! Notes in, flashcards out.
//!
//! One [`FlashcardPipeline::generate`] call is one chat request with its
//! own response buffer. Steps run strictly in order and the first failure
//! ends the call; callers never see a partial list.

use crate::chat_client::{ChatClient, ResponseBuffer};
use crate::config::{FlashConfig, MarkerConfig};
use crate::envelope::unwrap_completion;
use crate::error::FlashError;
use crate::extract::extract_spans;
use crate::flashcard::{FlashCard, assemble};
use crate::prompt::build_prompt;

use common::RedactedApiKey;

use log::info;

pub struct FlashcardPipeline {
    client: ChatClient,
    markers: MarkerConfig,
}

impl FlashcardPipeline {
    pub fn new(config: &FlashConfig, credential: RedactedApiKey) -> Result<Self, FlashError> {
        config.validate()?;
        let client = ChatClient::new(config, credential)?;

        Ok(Self {
            client,
            markers: config.markers.clone(),
        })
    }

    /// Turn `notes` into flashcards.
    ///
    /// # Errors
    ///
    /// - [`FlashError::Prompt`] for empty notes, before any network activity
    /// - [`FlashError::ChatClient`] on transport failure
    /// - [`FlashError::Envelope`] when the response is not a usable completion
    /// - [`FlashError::Flashcard`] when question and answer counts differ
    pub async fn generate(&self, notes: &str) -> Result<Vec<FlashCard>, FlashError> {
        let prompt = build_prompt(notes)?;

        let mut buffer = ResponseBuffer::new();
        let status = self.client.send(&prompt, &mut buffer).await?;

        let completion = unwrap_completion(&buffer, status)?;
        let cards = self.cards_from_completion(&completion)?;

        info!("Generated {} flashcards", cards.len());
        Ok(cards)
    }

    /// Extraction and assembly over already unwrapped completion text.
    pub fn cards_from_completion(&self, completion: &str) -> Result<Vec<FlashCard>, FlashError> {
        let questions = extract_spans(
            completion,
            &self.markers.question_marker,
            self.markers.question_terminator,
        );
        let answers = extract_spans(
            completion,
            &self.markers.answer_marker,
            self.markers.answer_terminator,
        );
        info!(
            "Extracted {} questions and {} answers",
            questions.len(),
            answers.len()
        );

        Ok(assemble(questions, answers)?)
    }
}

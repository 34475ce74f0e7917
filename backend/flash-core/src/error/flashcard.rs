use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum FlashcardError {
    #[error(
        "Mismatched Pairing Error: {questions} questions vs {answers} answers {location}"
    )]
    MismatchedPairing {
        questions: usize,
        answers: usize,
        location: ErrorLocation,
    },
}

impl FlashcardError {
    #[track_caller]
    pub fn mismatched_pairing(questions: usize, answers: usize) -> Self {
        FlashcardError::MismatchedPairing {
            questions,
            answers,
            location: ErrorLocation::caller(),
        }
    }
}

use crate::error::FlashcardError;

use serde::Serialize;

/// A question paired with its answer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashCard {
    question: String,
    answer: String,
}

impl FlashCard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Pair questions and answers by position.
///
/// # Errors
///
/// Returns [`FlashcardError::MismatchedPairing`] when the lists differ in
/// length. There is no way to realign them, so nothing is returned.
#[track_caller]
pub fn assemble(
    questions: Vec<String>,
    answers: Vec<String>,
) -> Result<Vec<FlashCard>, FlashcardError> {
    if questions.len() != answers.len() {
        return Err(FlashcardError::mismatched_pairing(
            questions.len(),
            answers.len(),
        ));
    }

    Ok(questions
        .into_iter()
        .zip(answers)
        .map(|(question, answer)| FlashCard { question, answer })
        .collect())
}

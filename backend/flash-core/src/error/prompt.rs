use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PromptError {
    #[error("Empty Input Error: note text is empty {location}")]
    EmptyInput { location: ErrorLocation },
}

impl PromptError {
    #[track_caller]
    pub fn empty_input() -> Self {
        PromptError::EmptyInput {
            location: ErrorLocation::caller(),
        }
    }
}

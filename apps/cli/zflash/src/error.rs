use flash_core::FlashError;

use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the zflash front end.
#[derive(Debug, Error)]
pub enum ZflashError {
    /// Failure inside the flashcard pipeline (credential, request, parsing)
    #[error(transparent)]
    Flash(#[from] FlashError),

    /// Note file or directory could not be used
    #[error("Notes Error: {path}: {message} {location}")]
    Notes {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    /// Directory mode finished with at least one failed file
    #[error("Directory Error: {failed} of {total} note files failed {location}")]
    DirectoryFailures {
        failed: usize,
        total: usize,
        location: ErrorLocation,
    },
}

impl ZflashError {
    /// Short label for the terminal failure line, e.g. `error[Transport]`.
    pub fn kind_label(&self) -> &'static str {
        match self {
            ZflashError::Flash(e) => e.kind().as_str(),
            ZflashError::Notes { .. } => "Notes",
            ZflashError::Logger { .. } => "Logger",
            ZflashError::Output { .. } => "Output",
            ZflashError::DirectoryFailures { .. } => "Directory",
        }
    }
}

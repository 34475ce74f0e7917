use crate::error::PromptError;

use log::debug;

/// Instruction placed in front of the notes. The notes follow it directly,
/// with no separator.
pub const PROMPT_PREAMBLE: &str =
    "generate me 10 flash cards with a Q&A based on my markdown notes\n(format correctly)";

/// Build the user prompt for `notes`.
///
/// The note text is appended verbatim: no escaping, trimming or size cap.
/// Very large notes give very large request bodies.
///
/// # Errors
///
/// Returns [`PromptError::EmptyInput`] for zero-length notes, so no request
/// is wasted on them.
#[track_caller]
pub fn build_prompt(notes: &str) -> Result<String, PromptError> {
    if notes.is_empty() {
        return Err(PromptError::empty_input());
    }

    let mut prompt = String::with_capacity(PROMPT_PREAMBLE.len() + notes.len());
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str(notes);

    debug!("Built prompt: {} bytes of notes", notes.len());
    Ok(prompt)
}

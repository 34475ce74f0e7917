use crate::error::PromptError;
use crate::prompt::{PROMPT_PREAMBLE, build_prompt};

/// **VALUE**: Verifies the notes are appended to the preamble byte for byte.
///
/// **BUG THIS CATCHES**: Would catch trimming, escaping or an inserted separator, any of
/// which changes what the model sees.
#[test]
fn given_notes_when_prompt_built_then_preamble_is_followed_by_verbatim_notes() {
    // GIVEN: Notes with markdown, quotes and trailing whitespace
    let notes = "# Rust\n- \"ownership\" rules  \n";

    // WHEN: Building the prompt
    let prompt = build_prompt(notes).unwrap();

    // THEN: preamble + notes, nothing else
    assert_eq!(prompt, format!("{PROMPT_PREAMBLE}{notes}"));
    assert!(prompt.ends_with(notes));
}

#[test]
fn given_empty_notes_when_prompt_built_then_returns_empty_input() {
    let result = build_prompt("");

    assert!(matches!(result, Err(PromptError::EmptyInput { .. })));
}

#[test]
fn given_whitespace_only_notes_when_prompt_built_then_is_accepted() {
    let prompt = build_prompt(" ").unwrap();

    assert_eq!(prompt.len(), PROMPT_PREAMBLE.len() + 1);
}

// Unit tests for note file loading

use crate::error::ZflashError;
use crate::notes::{is_markdown, list_markdown_files, read_markdown_file};

use std::path::Path;
use tempfile::TempDir;

#[test]
fn given_paths_when_checked_then_only_md_extension_is_markdown() {
    assert!(is_markdown(Path::new("notes.md")));
    assert!(is_markdown(Path::new("./dir.v2/notes.md")));
    assert!(!is_markdown(Path::new("notes.markdown")));
    assert!(!is_markdown(Path::new("notes.md.txt")));
    assert!(!is_markdown(Path::new("notes")));
}

/// **VALUE**: Verifies lines are re-joined with `\n` and the trailing newline dropped.
///
/// **BUG THIS CATCHES**: Would catch CRLF line endings leaking `\r` into the prompt.
#[test]
fn given_crlf_file_when_read_then_lines_joined_with_newline() {
    // GIVEN: A CRLF file with a trailing newline
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(&path, "# Title\r\nline one\r\nline two\r\n").unwrap();

    // WHEN: Reading
    let notes = read_markdown_file(&path).unwrap();

    // THEN: Normalized newlines, no trailing newline
    assert_eq!(notes, "# Title\nline one\nline two");
}

#[test]
fn given_empty_file_when_read_then_returns_empty_notes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.md");
    std::fs::write(&path, "\n").unwrap();

    let notes = read_markdown_file(&path).unwrap();

    assert!(notes.is_empty());
}

#[test]
fn given_wrong_extension_when_read_then_returns_notes_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "content").unwrap();

    let result = read_markdown_file(&path);

    match result {
        Err(ZflashError::Notes { message, .. }) => assert!(message.contains(".md")),
        other => panic!("expected Notes error, got {other:?}"),
    }
}

#[test]
fn given_missing_file_when_read_then_returns_notes_error() {
    let dir = TempDir::new().unwrap();

    let result = read_markdown_file(&dir.path().join("missing.md"));

    assert!(matches!(result, Err(ZflashError::Notes { .. })));
}

/// **VALUE**: Verifies directory listing keeps only top-level `.md` files, sorted.
///
/// **WHY THIS MATTERS**: Sorted order makes directory-mode output reproducible.
///
/// **BUG THIS CATCHES**: Would catch recursion into subdirectories or non-markdown files
/// being sent to the endpoint.
#[test]
fn given_mixed_directory_when_listed_then_returns_sorted_markdown_files() {
    // GIVEN: Markdown, non-markdown and a nested directory
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("b.md"), "b").unwrap();
    std::fs::write(dir.path().join("a.md"), "a").unwrap();
    std::fs::write(dir.path().join("image.png"), "png").unwrap();
    std::fs::create_dir(dir.path().join("nested.md")).unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("c.md"), "c").unwrap();

    // WHEN: Listing
    let files = list_markdown_files(dir.path()).unwrap();

    // THEN: Only a.md and b.md, in order
    assert_eq!(
        files,
        vec![dir.path().join("a.md"), dir.path().join("b.md")]
    );
}

#[test]
fn given_missing_directory_when_listed_then_returns_notes_error() {
    let dir = TempDir::new().unwrap();

    let result = list_markdown_files(&dir.path().join("nope"));

    assert!(matches!(result, Err(ZflashError::Notes { .. })));
}

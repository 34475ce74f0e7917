//! Markdown note loading for file and directory mode.

use crate::error::ZflashError;

use common::ErrorLocation;

use std::ffi::OsStr;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};

const MARKDOWN_EXTENSION: &str = "md";

pub fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(MARKDOWN_EXTENSION)
}

/// Read a `.md` file as note text.
///
/// Lines are re-joined with `\n`, so CRLF files and a trailing newline
/// both normalize away. An empty result is returned as-is; the pipeline
/// rejects it before any request goes out.
///
/// # Errors
///
/// Returns [`ZflashError::Notes`] if the path lacks the `.md` extension,
/// does not exist, is not a regular file, or cannot be read as UTF-8.
#[track_caller]
pub fn read_markdown_file(path: &Path) -> Result<String, ZflashError> {
    if !is_markdown(path) {
        return Err(notes_error(path, "file must be .md (Markdown)"));
    }

    if !path.is_file() {
        return Err(notes_error(path, "file doesn't exist or is not a regular file"));
    }

    let raw = std::fs::read_to_string(path).map_err(|e| ZflashError::Notes {
        path: path.to_path_buf(),
        message: format!("failed to read file: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let notes = raw.lines().collect::<Vec<_>>().join("\n");
    info!("Read {} ({} bytes of notes)", path.display(), notes.len());
    Ok(notes)
}

/// List the `.md` files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into.
///
/// # Errors
///
/// Returns [`ZflashError::Notes`] if `dir` is not a readable directory.
#[track_caller]
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, ZflashError> {
    if !dir.is_dir() {
        return Err(notes_error(dir, "directory doesn't exist"));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ZflashError::Notes {
        path: dir.to_path_buf(),
        message: format!("failed to read directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ZflashError::Notes {
            path: dir.to_path_buf(),
            message: format!("failed to read directory entry: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let path = entry.path();
        if path.is_file() && is_markdown(&path) {
            files.push(path);
        } else {
            debug!("Skipping {}", path.display());
        }
    }

    files.sort();
    info!("Found {} markdown files in {}", files.len(), dir.display());
    Ok(files)
}

#[track_caller]
fn notes_error(path: &Path, message: &str) -> ZflashError {
    ZflashError::Notes {
        path: path.to_path_buf(),
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

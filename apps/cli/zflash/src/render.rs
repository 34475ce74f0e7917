//! Terminal and JSON output of generated cards.

use crate::error::ZflashError;

use flash_core::FlashCard;

use common::ErrorLocation;

use std::io::Write;
use std::panic::Location;
use std::path::Path;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct FileCards<'a> {
    file: &'a str,
    cards: &'a [FlashCard],
}

/// `Q: …` / `A: …` per card.
pub fn render_text<W: Write>(out: &mut W, cards: &[FlashCard]) -> Result<(), ZflashError> {
    for card in cards {
        writeln!(out, "Q: {}\nA: {}", card.question(), card.answer())
            .map_err(|e| output_error(e))?;
    }
    Ok(())
}

/// Pretty JSON array of cards.
pub fn render_json<W: Write>(out: &mut W, cards: &[FlashCard]) -> Result<(), ZflashError> {
    serde_json::to_writer_pretty(&mut *out, cards).map_err(|e| output_error(e))?;
    writeln!(out).map_err(|e| output_error(e))
}

/// Cards for one file of a directory run.
///
/// Text gets a `==> path <==` header; JSON gets one `{"file", "cards"}`
/// object per line.
pub fn render_file<W: Write>(
    out: &mut W,
    path: &Path,
    cards: &[FlashCard],
    format: OutputFormat,
) -> Result<(), ZflashError> {
    let file = path.display().to_string();
    match format {
        OutputFormat::Text => {
            writeln!(out, "==> {file} <==").map_err(|e| output_error(e))?;
            render_text(out, cards)
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &FileCards { file: &file, cards })
                .map_err(|e| output_error(e))?;
            writeln!(out).map_err(|e| output_error(e))
        }
    }
}

#[track_caller]
pub(crate) fn output_error(e: impl std::fmt::Display) -> ZflashError {
    ZflashError::Output {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

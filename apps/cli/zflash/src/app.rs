//! One zflash run: config, credential, then notes → cards for each input.

use crate::error::ZflashError;
use crate::notes::{list_markdown_files, read_markdown_file};
use crate::render::{OutputFormat, output_error, render_file, render_json, render_text};

use flash_core::{FlashConfig, FlashError, FlashcardPipeline, credential};

use common::ErrorLocation;

use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub target: Target,
    pub config_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub cards: usize,
}

/// Execute a run, writing cards to `out` and diagnostics to `err`.
///
/// The credential is resolved before any note is read, so a missing key
/// fails the run up front. In directory mode files are processed one after
/// another, each with its own request; a failing file is reported on `err`
/// and the rest still run.
///
/// # Errors
///
/// - [`ZflashError::Flash`] for config, credential or pipeline failures
/// - [`ZflashError::Notes`] when the target cannot be read
/// - [`ZflashError::DirectoryFailures`] when any file of a directory failed
pub async fn run<W: Write, E: Write>(
    options: &RunOptions,
    out: &mut W,
    err: &mut E,
) -> Result<RunSummary, ZflashError> {
    let config_dir = match &options.config_dir {
        Some(dir) => dir.clone(),
        None => FlashConfig::default_dir().map_err(FlashError::from)?,
    };
    let config = FlashConfig::load(&config_dir).map_err(FlashError::from)?;

    if config.load_dotenv {
        let env_file = credential::load_dotenv();
        for path in &env_file.rejected {
            writeln!(err, "warning: ignoring malformed {}", path.display())
                .map_err(|e| output_error(e))?;
        }
    }
    let key = credential::resolve(&config.api_key_env).map_err(FlashError::from)?;
    let pipeline = FlashcardPipeline::new(&config, key)?;

    match &options.target {
        Target::File(path) => {
            let cards = process_file(&pipeline, path, options.format, out, false).await?;
            Ok(RunSummary { files: 1, cards })
        }
        Target::Directory(dir) => {
            process_directory(&pipeline, dir, options.format, out, err).await
        }
    }
}

async fn process_directory<W: Write, E: Write>(
    pipeline: &FlashcardPipeline,
    dir: &Path,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> Result<RunSummary, ZflashError> {
    let files = list_markdown_files(dir)?;

    let mut cards = 0;
    let mut failed = 0;
    for path in &files {
        match process_file(pipeline, path, format, out, true).await {
            Ok(count) => cards += count,
            Err(e) => {
                error!("{}: {}", path.display(), e);
                writeln!(err, "error[{}]: {}: {}", e.kind_label(), path.display(), e)
                    .map_err(|e| output_error(e))?;
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(ZflashError::DirectoryFailures {
            failed,
            total: files.len(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    info!("Processed {} files, {} cards", files.len(), cards);
    Ok(RunSummary {
        files: files.len(),
        cards,
    })
}

async fn process_file<W: Write>(
    pipeline: &FlashcardPipeline,
    path: &Path,
    format: OutputFormat,
    out: &mut W,
    with_header: bool,
) -> Result<usize, ZflashError> {
    let notes = read_markdown_file(path)?;
    let cards = pipeline.generate(&notes).await?;

    if with_header {
        render_file(out, path, &cards, format)?;
    } else {
        match format {
            OutputFormat::Text => render_text(out, &cards)?,
            OutputFormat::Json => render_json(out, &cards)?,
        }
    }

    Ok(cards.len())
}

//! Command-line surface: `-f <file>`, `-d <dir>`, help and version.

use crate::app::{RunOptions, Target};
use crate::render::OutputFormat;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, value_parser};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const ABOUT: &str = "Generate flashcards from markdown notes";

const DESCRIPTION: &str = "\
The zflash utility generates flashcards from the specified file or directory.
You must provide either a file or a directory to process.

Examples:
  zflash -f /path/to/file.md
  zflash -d /path/to/directory";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub target: Target,
    pub config_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub show_banner: bool,
    pub verbose: bool,
}

impl CliArgs {
    /// Parse the process arguments, exiting with usage on error, `--help` or `--version`.
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        // The required "target" group guarantees exactly one of these
        let target = match matches.get_one::<PathBuf>("file") {
            Some(path) => Target::File(path.clone()),
            None => Target::Directory(
                matches
                    .get_one::<PathBuf>("directory")
                    .cloned()
                    .unwrap_or_default(),
            ),
        };

        let format = if matches.get_flag("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Self {
            target,
            config_dir: matches.get_one::<PathBuf>("config").cloned(),
            format,
            show_banner: format == OutputFormat::Text && !matches.get_flag("no-banner"),
            verbose: matches.get_flag("verbose"),
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            target: self.target.clone(),
            config_dir: self.config_dir.clone(),
            format: self.format,
        }
    }
}

pub fn command() -> Command {
    Command::new("zflash")
        .version(VERSION)
        .about(ABOUT)
        .long_about(DESCRIPTION)
        .disable_version_flag(true)
        .arg(
            Arg::new("file")
                .help("Markdown file to generate flashcards from")
                .short('f')
                .long("file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("directory")
                .help("Directory of markdown files to process one by one")
                .short('d')
                .long("directory")
                .value_name("DIR_PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .group(
            ArgGroup::new("target")
                .args(["file", "directory"])
                .required(true),
        )
        .arg(
            Arg::new("config")
                .help("Directory holding config.json (defaults to the platform config dir)")
                .long("config")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .help("Print cards as JSON instead of Q:/A: lines")
                .long("json")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-banner")
                .help("Skip the startup banner")
                .long("no-banner")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .help("Log debug output to stderr")
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .help("Print zflash version")
                .short('v')
                .long("version")
                .action(ArgAction::Version),
        )
}

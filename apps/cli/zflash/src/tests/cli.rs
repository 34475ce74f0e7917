// Unit tests for command-line parsing

use crate::app::Target;
use crate::cli::CliArgs;
use crate::render::OutputFormat;

use clap::error::ErrorKind;
use std::path::PathBuf;

#[test]
fn given_file_flag_when_parsed_then_targets_file() {
    let args = CliArgs::try_parse_from(["zflash", "-f", "notes.md"]).unwrap();

    assert_eq!(args.target, Target::File(PathBuf::from("notes.md")));
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.show_banner);
    assert!(!args.verbose);
    assert_eq!(args.config_dir, None);
}

#[test]
fn given_long_directory_flag_when_parsed_then_targets_directory() {
    let args = CliArgs::try_parse_from(["zflash", "--directory", "notes/"]).unwrap();

    assert_eq!(args.target, Target::Directory(PathBuf::from("notes/")));
}

/// **VALUE**: Verifies JSON output suppresses the banner.
///
/// **BUG THIS CATCHES**: Would catch ANSI banner bytes landing in front of JSON on stdout,
/// which breaks `zflash --json ... | jq`.
#[test]
fn given_json_flag_when_parsed_then_banner_is_disabled() {
    let args = CliArgs::try_parse_from(["zflash", "--json", "-f", "a.md"]).unwrap();

    assert_eq!(args.format, OutputFormat::Json);
    assert!(!args.show_banner);
}

#[test]
fn given_config_and_verbose_when_parsed_then_options_carry_them() {
    let args = CliArgs::try_parse_from([
        "zflash",
        "-f",
        "a.md",
        "--config",
        "/tmp/zflash-config",
        "--verbose",
        "--no-banner",
    ])
    .unwrap();

    assert_eq!(args.config_dir, Some(PathBuf::from("/tmp/zflash-config")));
    assert!(args.verbose);
    assert!(!args.show_banner);

    let options = args.run_options();
    assert_eq!(options.target, Target::File(PathBuf::from("a.md")));
    assert_eq!(options.config_dir, Some(PathBuf::from("/tmp/zflash-config")));
}

/// **VALUE**: Verifies a run needs exactly one of `-f` / `-d`.
///
/// **BUG THIS CATCHES**: Would catch the target group losing `required(true)` or its
/// mutual exclusion.
#[test]
fn given_no_target_or_both_targets_when_parsed_then_fails() {
    let none = CliArgs::try_parse_from(["zflash"]).unwrap_err();
    assert_eq!(none.kind(), ErrorKind::MissingRequiredArgument);

    let both = CliArgs::try_parse_from(["zflash", "-f", "a.md", "-d", "dir"]).unwrap_err();
    assert_eq!(both.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn given_flag_without_path_when_parsed_then_fails() {
    let err = CliArgs::try_parse_from(["zflash", "-f"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn given_short_version_flag_when_parsed_then_displays_version() {
    let err = CliArgs::try_parse_from(["zflash", "-v"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn given_help_flag_when_parsed_then_displays_help() {
    let err = CliArgs::try_parse_from(["zflash", "--help"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert!(err.to_string().contains("--directory"));
}

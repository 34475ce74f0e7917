// End-to-end runs of the front end against a mock chat endpoint
// Env-mutating, so every test is serial

use zflash::app::{RunOptions, RunSummary, Target, run};
use zflash::error::ZflashError;
use zflash::render::OutputFormat;

use serde_json::json;
use serial_test::serial;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY_VAR: &str = "ZFLASH_IT_API_KEY";
const TOKEN: &str = "sk-zflash-integration";

fn write_config(dir: &Path, server: &MockServer) {
    let config = json!({
        "endpoint_url": format!("{}/v1/chat/completions", server.uri()),
        "api_key_env": KEY_VAR,
        "load_dotenv": false
    });
    std::fs::write(dir.join("config.json"), config.to_string()).unwrap();
}

fn envelope(content: &str) -> serde_json::Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

async fn mock_endpoint(content: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(content)))
        .mount(&server)
        .await;
    server
}

fn options(target: Target, config_dir: &Path, format: OutputFormat) -> RunOptions {
    RunOptions {
        target,
        config_dir: Some(config_dir.to_path_buf()),
        format,
    }
}

/// **VALUE**: Runs `zflash -f notes.md` end to end.
///
/// **WHY THIS MATTERS**: Covers config loading, credential lookup, file reading, the
/// request, extraction and text rendering together.
#[tokio::test]
#[serial]
async fn given_markdown_file_when_run_then_prints_cards() {
    // GIVEN: Config, credential and a note file
    let server = mock_endpoint("Q: What is 2+2?A: 4\nQ: What is the capital of France?A: Paris\n").await;
    let config_dir = TempDir::new().unwrap();
    write_config(config_dir.path(), &server);
    unsafe { std::env::set_var(KEY_VAR, TOKEN) };

    let notes_dir = TempDir::new().unwrap();
    let notes = notes_dir.path().join("notes.md");
    std::fs::write(&notes, "# Maths\n2+2=4\n").unwrap();

    // WHEN: Running in file mode
    let mut out = Vec::new();
    let mut err_out = Vec::new();
    let summary = run(
        &options(Target::File(notes), config_dir.path(), OutputFormat::Text),
        &mut out,
        &mut err_out,
    )
    .await
    .unwrap();

    // THEN: Two cards printed as Q:/A: lines
    assert_eq!(summary, RunSummary { files: 1, cards: 2 });
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Q: What is 2+2\nA: 4\nQ: What is the capital of France\nA: Paris\n"
    );

    unsafe { std::env::remove_var(KEY_VAR) };
}

/// **VALUE**: Verifies a missing credential stops the run before any request.
///
/// **BUG THIS CATCHES**: Would catch the credential being resolved lazily after the
/// request was already sent without auth.
#[tokio::test]
#[serial]
async fn given_unset_credential_when_run_then_fails_with_missing_credential() {
    // GIVEN: An endpoint that must not be hit and no credential in the environment
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config_dir = TempDir::new().unwrap();
    write_config(config_dir.path(), &server);
    unsafe { std::env::remove_var(KEY_VAR) };

    let notes_dir = TempDir::new().unwrap();
    let notes = notes_dir.path().join("notes.md");
    std::fs::write(&notes, "content").unwrap();

    // WHEN: Running
    let mut out = Vec::new();
    let mut err_out = Vec::new();
    let err = run(
        &options(Target::File(notes), config_dir.path(), OutputFormat::Text),
        &mut out,
        &mut err_out,
    )
    .await
    .expect_err("must fail");

    // THEN: MissingCredential, nothing printed
    assert_eq!(err.kind_label(), "MissingCredential");
    assert!(out.is_empty());
    server.verify().await;
}

#[tokio::test]
#[serial]
async fn given_empty_markdown_file_when_run_then_fails_with_empty_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config_dir = TempDir::new().unwrap();
    write_config(config_dir.path(), &server);
    unsafe { std::env::set_var(KEY_VAR, TOKEN) };

    let notes_dir = TempDir::new().unwrap();
    let notes = notes_dir.path().join("empty.md");
    std::fs::write(&notes, "").unwrap();

    let mut out = Vec::new();
    let mut err_out = Vec::new();
    let err = run(
        &options(Target::File(notes), config_dir.path(), OutputFormat::Text),
        &mut out,
        &mut err_out,
    )
    .await
    .expect_err("must fail");

    assert_eq!(err.kind_label(), "EmptyInput");
    server.verify().await;
    unsafe { std::env::remove_var(KEY_VAR) };
}

/// **VALUE**: Verifies directory mode processes every file in order and keeps going past
/// a failing one.
///
/// **WHY THIS MATTERS**: One empty note in a folder of fifty should not cost the other
/// forty-nine decks.
#[tokio::test]
#[serial]
async fn given_directory_with_bad_file_when_run_then_processes_rest_and_reports_failure() {
    // GIVEN: Two good notes and one empty one
    let server = mock_endpoint("Q: Rust?A: yes\n").await;
    let config_dir = TempDir::new().unwrap();
    write_config(config_dir.path(), &server);
    unsafe { std::env::set_var(KEY_VAR, TOKEN) };

    let notes_dir = TempDir::new().unwrap();
    std::fs::write(notes_dir.path().join("a.md"), "alpha").unwrap();
    std::fs::write(notes_dir.path().join("b.md"), "").unwrap();
    std::fs::write(notes_dir.path().join("c.md"), "gamma").unwrap();

    // WHEN: Running in directory mode with JSON output
    let mut out = Vec::new();
    let mut err_out = Vec::new();
    let result = run(
        &options(
            Target::Directory(notes_dir.path().to_path_buf()),
            config_dir.path(),
            OutputFormat::Json,
        ),
        &mut out,
        &mut err_out,
    )
    .await;

    // THEN: One JSON line per good file, in order, and an overall failure
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0]["file"].as_str().unwrap().ends_with("a.md"));
    assert!(lines[1]["file"].as_str().unwrap().ends_with("c.md"));
    assert_eq!(lines[1]["cards"][0]["question"], "Rust");

    match result {
        Err(ZflashError::DirectoryFailures { failed, total, .. }) => {
            assert_eq!(failed, 1);
            assert_eq!(total, 3);
        }
        other => panic!("expected DirectoryFailures, got {other:?}"),
    }

    // AND: The failing file is named on the diagnostics writer only
    let diagnostics = String::from_utf8(err_out).unwrap();
    assert_eq!(diagnostics.lines().count(), 1);
    assert!(diagnostics.starts_with("error[EmptyInput]: "));
    assert!(diagnostics.contains("b.md"));
    assert!(!output.contains("EmptyInput"));

    unsafe { std::env::remove_var(KEY_VAR) };
}

#[tokio::test]
#[serial]
async fn given_corrupt_config_when_run_then_fails_with_config_error() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join("config.json"), "{ nope").unwrap();

    let mut out = Vec::new();
    let mut err_out = Vec::new();
    let err = run(
        &options(
            Target::File("unused.md".into()),
            config_dir.path(),
            OutputFormat::Text,
        ),
        &mut out,
        &mut err_out,
    )
    .await
    .expect_err("must fail");

    assert_eq!(err.kind_label(), "Config");
}

/// **VALUE**: Verifies a malformed .env is named on the diagnostics writer while the run
/// still succeeds from the existing environment.
///
/// **WHY THIS MATTERS**: A broken .env used to vanish silently, leaving users to guess why
/// their key was not picked up.
///
/// **BUG THIS CATCHES**: Would catch the loader result being dropped by the front end.
#[tokio::test]
#[serial]
async fn given_malformed_dotenv_when_run_then_warns_and_continues() {
    // GIVEN: dotenv loading on, a broken .env in the working directory, key already exported
    let server = mock_endpoint("Q: Rust?A: yes\n").await;
    let config_dir = TempDir::new().unwrap();
    let config = json!({
        "endpoint_url": format!("{}/v1/chat/completions", server.uri()),
        "api_key_env": KEY_VAR,
        "load_dotenv": true
    });
    std::fs::write(config_dir.path().join("config.json"), config.to_string()).unwrap();
    unsafe { std::env::set_var(KEY_VAR, TOKEN) };

    let work_dir = TempDir::new().unwrap();
    std::fs::write(work_dir.path().join(".env"), "ZFLASH_IT_BROKEN no-equals\n").unwrap();
    std::fs::write(work_dir.path().join("notes.md"), "rust notes").unwrap();
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(work_dir.path()).unwrap();

    // WHEN: Running in file mode
    let mut out = Vec::new();
    let mut err_out = Vec::new();
    let result = run(
        &options(
            Target::File(work_dir.path().join("notes.md")),
            config_dir.path(),
            OutputFormat::Text,
        ),
        &mut out,
        &mut err_out,
    )
    .await;
    std::env::set_current_dir(original_dir).unwrap();
    unsafe { std::env::remove_var(KEY_VAR) };

    // THEN: Cards printed, one warning naming the .env
    assert_eq!(result.unwrap(), RunSummary { files: 1, cards: 1 });
    assert_eq!(String::from_utf8(out).unwrap(), "Q: Rust\nA: yes\n");
    let diagnostics = String::from_utf8(err_out).unwrap();
    assert!(diagnostics.starts_with("warning: ignoring malformed "));
    assert!(diagnostics.trim_end().ends_with(".env"));
}

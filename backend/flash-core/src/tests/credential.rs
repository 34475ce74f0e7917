// Unit tests for credential resolution
// These mutate the process environment, so they run serially

use crate::credential::{load_dotenv, load_dotenv_from, resolve};
use crate::error::CredentialError;

use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

const TEST_VAR: &str = "ZFLASH_TEST_CREDENTIAL";
const DOTENV_VAR: &str = "ZFLASH_DOTENV_TEST_KEY";

/// Runs a test from inside a temp dir and puts the process back afterwards,
/// even when an assertion fails.
struct CwdGuard {
    original: PathBuf,
    dir: TempDir,
}

impl CwdGuard {
    fn enter() -> Self {
        let original = std::env::current_dir().unwrap();
        let dir = TempDir::new().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        unsafe { std::env::remove_var(DOTENV_VAR) };
        Self { original, dir }
    }

    fn write_dotenv(&self, contents: &str) -> PathBuf {
        std::fs::write(self.dir.path().join(".env"), contents).unwrap();
        std::env::current_dir().unwrap().join(".env")
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
        unsafe { std::env::remove_var(DOTENV_VAR) };
    }
}

/// **VALUE**: Verifies an unset variable fails fast with the variable's name.
///
/// **WHY THIS MATTERS**: This is the first thing a new user hits. The message has to say
/// which variable to export.
///
/// **BUG THIS CATCHES**: Would catch falling back to an empty key, which would only surface
/// later as a confusing 401.
#[test]
#[serial]
fn given_unset_variable_when_resolved_then_returns_missing_credential() {
    // GIVEN: The variable is not set
    unsafe { std::env::remove_var(TEST_VAR) };

    // WHEN: Resolving
    let result = resolve(TEST_VAR);

    // THEN: Missing, naming the variable
    match result {
        Err(err @ CredentialError::Missing { .. }) => {
            assert!(err.to_string().contains(TEST_VAR));
        }
        other => panic!("expected Missing, got {other:?}"),
    }
}

#[test]
#[serial]
fn given_set_variable_when_resolved_then_returns_redacted_key() {
    // GIVEN: The variable holds a token
    unsafe { std::env::set_var(TEST_VAR, "sk-unit-test-token") };

    // WHEN: Resolving
    let key = resolve(TEST_VAR).unwrap();

    // THEN: The value is available for the header but hidden from Debug
    assert_eq!(key.as_str(), "sk-unit-test-token");
    assert!(!format!("{key:?}").contains("sk-unit-test-token"));

    unsafe { std::env::remove_var(TEST_VAR) };
}

/// **VALUE**: Verifies a .env in the working directory supplies the credential.
///
/// **WHY THIS MATTERS**: Most users keep their key in a .env next to their notes rather
/// than exporting it in every shell.
///
/// **BUG THIS CATCHES**: Would catch the loader looking in the wrong place or the
/// resolver running before the file is applied.
#[test]
#[serial]
fn given_valid_dotenv_in_cwd_when_loaded_then_credential_resolves() {
    // GIVEN: A .env defining the key in the current directory
    let guard = CwdGuard::enter();
    let expected_path = guard.write_dotenv(&format!("{DOTENV_VAR}=sk-from-dotenv\n"));

    // WHEN: Loading then resolving
    let result = load_dotenv();
    let key = resolve(DOTENV_VAR).unwrap();

    // THEN: The cwd file was used
    assert!(result.loaded());
    assert_eq!(result.path, Some(expected_path));
    assert!(result.rejected.is_empty());
    assert_eq!(key.as_str(), "sk-from-dotenv");
}

#[test]
#[serial]
fn given_no_dotenv_when_loaded_then_reports_nothing_loaded() {
    // GIVEN: An empty working directory
    let _guard = CwdGuard::enter();
    let missing = std::env::current_dir().unwrap().join(".env");

    // WHEN: Loading from just that directory
    let result = load_dotenv_from(&[missing]);

    // THEN: Nothing loaded, nothing rejected, no error
    assert!(!result.loaded());
    assert!(result.path.is_none());
    assert!(result.rejected.is_empty());
}

/// **VALUE**: Verifies an unparsable .env is reported instead of being mistaken for an
/// absent one.
///
/// **WHY THIS MATTERS**: A typo such as a missing `=` otherwise surfaces only as a
/// MissingCredential error, pointing the user at their shell instead of the file.
///
/// **BUG THIS CATCHES**: Would catch collapsing every dotenvy error into "not found".
#[test]
#[serial]
fn given_malformed_dotenv_when_loaded_then_file_is_rejected_and_credential_missing() {
    // GIVEN: A .env line without `=`
    let guard = CwdGuard::enter();
    let dotenv_path = guard.write_dotenv(&format!("{DOTENV_VAR} sk-missing-equals\n"));

    // WHEN: Loading from the working directory
    let result = load_dotenv_from(&[dotenv_path.clone()]);

    // THEN: The file is rejected and the key stays unset
    assert!(!result.loaded());
    assert_eq!(result.rejected, vec![dotenv_path]);
    assert!(matches!(
        resolve(DOTENV_VAR),
        Err(CredentialError::Missing { .. })
    ));
}

#[test]
#[serial]
fn given_malformed_then_valid_candidate_when_loaded_then_falls_through_to_valid() {
    // GIVEN: A broken .env followed by a good one
    let guard = CwdGuard::enter();
    let broken = guard.write_dotenv("not a dotenv line\n");
    let fallback_dir = TempDir::new().unwrap();
    let fallback = fallback_dir.path().join(".env");
    std::fs::write(&fallback, format!("{DOTENV_VAR}=sk-fallback\n")).unwrap();

    // WHEN: Loading in order
    let result = load_dotenv_from(&[broken.clone(), fallback.clone()]);

    // THEN: The second file wins and the first is recorded
    assert_eq!(result.path, Some(fallback));
    assert_eq!(result.rejected, vec![broken]);
    assert_eq!(resolve(DOTENV_VAR).unwrap().as_str(), "sk-fallback");
}

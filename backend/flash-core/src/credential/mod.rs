//! Bearer token resolution from the process environment.
//!
//! # Security
//! - The token is wrapped in [`RedactedApiKey`] the moment it is read
//! - Only its length is ever logged

use crate::error::CredentialError;

use common::RedactedApiKey;

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DOTENV_FILE_NAME: &str = ".env";

/// Outcome of looking for .env files.
#[derive(Debug, Default)]
pub struct EnvLoadResult {
    /// The .env file that was applied, if any.
    pub path: Option<PathBuf>,
    /// .env files that exist but could not be parsed.
    pub rejected: Vec<PathBuf>,
}

impl EnvLoadResult {
    pub fn loaded(&self) -> bool {
        self.path.is_some()
    }
}

/// Resolve the credential stored in `var_name`.
///
/// # Errors
///
/// - [`CredentialError::Missing`] if the variable is unset
/// - [`CredentialError::NotUnicode`] if it holds non-UTF-8 data
#[track_caller]
pub fn resolve(var_name: &str) -> Result<RedactedApiKey, CredentialError> {
    match env::var(var_name) {
        Ok(value) => {
            let key = RedactedApiKey::new(value);
            info!("Resolved credential from {} ({} chars)", var_name, key.len());
            Ok(key)
        }
        Err(env::VarError::NotPresent) => Err(CredentialError::missing(var_name)),
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Env var {} contains invalid unicode", var_name);
            Err(CredentialError::not_unicode(var_name))
        }
    }
}

/// Loads the first usable .env from the current directory, then from the
/// executable's directory.
///
/// Never fails: an absent file is normal, and an unparsable one is logged,
/// recorded in [`EnvLoadResult::rejected`] and skipped.
pub fn load_dotenv() -> EnvLoadResult {
    let mut candidates = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join(DOTENV_FILE_NAME));
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        let path = exe_dir.join(DOTENV_FILE_NAME);
        if !candidates.contains(&path) {
            candidates.push(path);
        }
    }

    load_dotenv_from(&candidates)
}

/// Tries each candidate in order and stops at the first one that loads.
/// Variables already present in the environment are never overwritten.
pub fn load_dotenv_from(candidates: &[PathBuf]) -> EnvLoadResult {
    let mut result = EnvLoadResult::default();

    for path in candidates {
        match dotenvy::from_path(path) {
            Ok(()) => {
                info!("Loaded .env from: {:?}", path);
                result.path = Some(path.clone());
                return result;
            }
            Err(e) if e.not_found() => {
                debug!("No .env at {:?}", path);
            }
            Err(e) => {
                warn!("Ignoring malformed .env at {:?}: {}", path, e);
                result.rejected.push(path.clone());
            }
        }
    }

    if result.rejected.is_empty() {
        debug!("No .env file found - relying on existing environment variables");
    }
    result
}

use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialError {
    #[error("Missing Credential Error: environment variable {var_name} is not set {location}")]
    Missing {
        var_name: String,
        location: ErrorLocation,
    },

    #[error("Missing Credential Error: environment variable {var_name} is not valid unicode {location}")]
    NotUnicode {
        var_name: String,
        location: ErrorLocation,
    },
}

impl CredentialError {
    #[track_caller]
    pub fn missing(var_name: impl Into<String>) -> Self {
        CredentialError::Missing {
            var_name: var_name.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn not_unicode(var_name: impl Into<String>) -> Self {
        CredentialError::NotUnicode {
            var_name: var_name.into(),
            location: ErrorLocation::caller(),
        }
    }
}

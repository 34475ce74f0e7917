use crate::error::FailureKind;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ChatClientError {
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// The request payload could not be serialized
    #[error("Request Serialization Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Header Error: {header}: {message} {location}")]
    InvalidHeader {
        header: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ChatClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ChatClientError::Transport { .. } => FailureKind::Transport,
            ChatClientError::Json { .. }
            | ChatClientError::UrlParse { .. }
            | ChatClientError::InvalidHeader { .. } => FailureKind::Config,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ChatClientError::Transport { is_timeout: true, .. })
    }

    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            ChatClientError::Transport {
                is_connection: true,
                ..
            }
        )
    }
}

impl From<url::ParseError> for ChatClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ChatClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ChatClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ChatClientError::Transport {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ChatClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ChatClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

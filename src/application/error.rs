use std::error::Error as StdError;

use thiserror::Error;

use crate::{config::LoadError, infra::error::InfraError};

/// Exit status for request/response failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for configuration failures, including a missing access token.
pub const EXIT_CONFIG: u8 = 2;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("missing access token. Pass --access-token or set WPCOM_ACCESS_TOKEN.")]
    MissingToken,
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("received non-JSON response from API.")]
    Decode(#[source] serde_json::Error),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to render output: {0}")]
    Render(String),
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl PublishError {
    /// Describe a transport failure with its whole source chain; reqwest keeps
    /// the cause (refused, timed out, dns) in the sources.
    pub fn network(error: &reqwest::Error) -> Self {
        let mut description = error.to_string();
        let mut current = error.source();
        while let Some(inner) = current {
            description.push_str(": ");
            description.push_str(&inner.to_string());
            current = inner.source();
        }
        Self::Network(description)
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            PublishError::MissingToken | PublishError::Config(_) | PublishError::Infra(_) => {
                EXIT_CONFIG
            }
            PublishError::Http { .. }
            | PublishError::Network(_)
            | PublishError::Decode(_)
            | PublishError::InputFile { .. }
            | PublishError::InvalidInput(_)
            | PublishError::Url(_)
            | PublishError::Render(_) => EXIT_FAILURE,
        }
    }
}

impl From<reqwest::Error> for PublishError {
    fn from(error: reqwest::Error) -> Self {
        Self::network(&error)
    }
}

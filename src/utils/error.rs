use reqwest::StatusCode;
use thiserror::Error;

/// Rejected construction parameters. Decorators and leaves validate their
/// configuration up front so a chain never runs with an ambiguous setup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to build HTTP client: {message}")]
    ClientBuildError { message: String },
}

/// Failure of a caller-supplied fallible transform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Transform failed: {message}")]
pub struct TransformError {
    pub message: String,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Publish failed: {message}")]
    Failed { message: String },

    #[error("Sink write failed: {0}")]
    Sink(#[from] std::io::Error),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl PublishError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Unexpected HTTP status: {status}")]
    Status { status: StatusCode },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP call failed: {message}")]
    Failed { message: String },

    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl HttpError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type PublishResult<T> = std::result::Result<T, PublishError>;
pub type HttpResult<T> = std::result::Result<T, HttpError>;

//! Error handling
//!
//! Nothing in here is fatal to the dashboard: the worst a re-evaluation can
//! do is leave the previous record on screen.

use std::path::PathBuf;
use thiserror::Error;

/// Errors talking to the Analysis Service (re-evaluate, analyze, chat)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("HTTP client error: {0}")]
    Client(String),

    /// The caller stopped waiting before the service answered
    #[error("Request cancelled")]
    Cancelled,
}

impl ServiceError {
    /// Classify a transport-level reqwest failure
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout
        } else {
            ServiceError::Network(err.to_string())
        }
    }

    /// HTTP status, if the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors loading an initial AnalysisRecord
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Cannot read record file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{0}': expected http:// or https://")]
    InvalidUrl(String),

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Notice capacity must be greater than zero")]
    ZeroNoticeCapacity,
}

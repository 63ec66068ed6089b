use crate::api::ReportKind;
use crate::mode::{FileSource, UploadMode};
use thiserror::Error;

/// Problems caught before anything is sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please {} a valid {} file", .via.verb(), .mode.category())]
    WrongFileType { mode: UploadMode, via: FileSource },

    #[error("Please select {} first", .0.staged_noun())]
    NothingStaged(UploadMode),

    #[error("No {} available for report generation", .0.subject())]
    NothingToReport(ReportKind),
}

/// Failures of a request to the detection API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Decode(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

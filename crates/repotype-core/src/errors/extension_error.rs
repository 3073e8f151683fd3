//! Errors surfaced to the host pipeline by extension entry points.

use super::error_code::{self, RepotypeErrorCode};
use super::StorageError;

/// A single wrapped error per failed run or backout. The original message is
/// kept as the `source`.
#[derive(Debug, thiserror::Error)]
pub enum ExtensionError {
    #[error("Extension {extension} failed: {source}")]
    Run {
        extension: String,
        #[source]
        source: StorageError,
    },

    #[error("Backout of {extension} failed: {source}")]
    Backout {
        extension: String,
        #[source]
        source: StorageError,
    },

    #[error("Could not resolve repository URI for {path}: {message}")]
    Locator { path: String, message: String },

    #[error("Unknown extension: {0}")]
    UnknownExtension(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtensionError {
    /// The storage failure behind a run/backout error, if any.
    pub fn storage_error(&self) -> Option<&StorageError> {
        match self {
            Self::Run { source, .. } | Self::Backout { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl RepotypeErrorCode for ExtensionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Run { source, .. } | Self::Backout { source, .. } => source.error_code(),
            Self::Locator { .. } => error_code::LOCATOR_ERROR,
            Self::UnknownExtension(_) => error_code::UNKNOWN_EXTENSION,
            Self::Config(_) => error_code::CONFIG_ERROR,
        }
    }
}

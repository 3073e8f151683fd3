//! Storage-layer errors for the classification table.

use super::error_code::{self, RepotypeErrorCode};

/// Errors that can occur while provisioning, reading or writing `file_types`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    /// DDL failed for a reason other than the object already existing.
    #[error("Schema error creating {object}: {message}")]
    SchemaError { object: String, message: String },

    /// A batch insert or a delete failed.
    #[error("Write failed ({context}): {message}")]
    WriteError { context: String, message: String },

    #[error("Repository not found: {uri}")]
    RepositoryNotFound { uri: String },

    /// An allocated id was already present in the store.
    #[error("Identifier {id} already present in file_types (stale allocator seed?)")]
    IdentityCollision { id: i64 },
}

impl RepotypeErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::SchemaError { .. } => error_code::SCHEMA_ERROR,
            Self::WriteError { .. } => error_code::WRITE_ERROR,
            Self::RepositoryNotFound { .. } => error_code::REPOSITORY_NOT_FOUND,
            Self::IdentityCollision { .. } => error_code::IDENTITY_COLLISION,
        }
    }
}

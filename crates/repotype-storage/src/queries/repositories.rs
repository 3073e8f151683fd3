//! repositories table queries.

use repotype_core::errors::StorageError;
use repotype_core::types::identifiers::RepositoryId;
use rusqlite::{params, OptionalExtension};

use crate::store::{sqe, FileTypesStore};

/// `repositories.id` for a canonical URI.
pub fn repository_id_for_uri(
    store: &FileTypesStore,
    uri: &str,
) -> Result<RepositoryId, StorageError> {
    let mut stmt = store
        .connection()
        .prepare_cached("SELECT id FROM repositories WHERE uri = ?")
        .map_err(sqe)?;

    let id: Option<i64> = stmt
        .query_row(params![uri], |row| row.get(0))
        .optional()
        .map_err(sqe)?;

    id.map(RepositoryId).ok_or_else(|| StorageError::RepositoryNotFound {
        uri: uri.to_string(),
    })
}

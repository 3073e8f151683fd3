//! file_types table queries.

use repotype_core::errors::StorageError;
use repotype_core::types::identifiers::{EntryId, RecordId, RepositoryId};
use repotype_core::types::{ClassificationRecord, FxHashSet};
use rusqlite::params;

use crate::dialect::SqlFailure;
use crate::store::{sqe, write_err, FileTypesStore};

const INSERT_SQL: &str = "INSERT INTO file_types (id, file_id, type) VALUES (?, ?, ?)";

/// Highest id in `file_types`, or `None` when the table is empty.
pub fn max_id(store: &FileTypesStore) -> Result<Option<i64>, StorageError> {
    let mut stmt = store
        .connection()
        .prepare_cached("SELECT MAX(id) FROM file_types")
        .map_err(sqe)?;
    stmt.query_row([], |row| row.get(0)).map_err(sqe)
}

/// Entries of `repository_id` that already have a `file_types` row.
pub fn already_classified(
    store: &FileTypesStore,
    repository_id: RepositoryId,
) -> Result<FxHashSet<EntryId>, StorageError> {
    let mut stmt = store
        .connection()
        .prepare_cached(
            "SELECT ft.file_id FROM file_types ft, files f
             WHERE f.id = ft.file_id AND f.repository_id = ?",
        )
        .map_err(sqe)?;

    let rows = stmt
        .query_map(params![repository_id.0], |row| row.get::<_, i64>(0))
        .map_err(sqe)?;

    let mut result = FxHashSet::default();
    for row in rows {
        result.insert(EntryId(row.map_err(sqe)?));
    }
    Ok(result)
}

/// Insert `records` in one transaction. Nothing is written on failure.
pub fn insert_file_types(
    store: &FileTypesStore,
    records: &[ClassificationRecord],
) -> Result<usize, StorageError> {
    let conn = store.connection();
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| insert_err(store, None, &e))?;
    {
        let mut stmt = tx
            .prepare_cached(INSERT_SQL)
            .map_err(|e| insert_err(store, None, &e))?;
        for r in records {
            stmt.execute(params![r.id.0, r.entry_id.0, r.file_type])
                .map_err(|e| insert_err(store, Some(r.id), &e))?;
        }
    }
    tx.commit().map_err(|e| insert_err(store, None, &e))?;
    Ok(records.len())
}

fn insert_err(store: &FileTypesStore, id: Option<RecordId>, e: &rusqlite::Error) -> StorageError {
    let failure = SqlFailure::from(e);
    match id {
        Some(id) if store.dialect().is_primary_key_violation(&failure) => {
            StorageError::IdentityCollision { id: id.0 }
        }
        _ => write_err("insert file_types", e),
    }
}

/// Delete every `file_types` row whose entry belongs to `repository_id`.
/// A missing `file_types` table counts as nothing to delete; any other
/// failure, including a missing `files` table, is a `WriteError`.
pub fn delete_for_repository(
    store: &FileTypesStore,
    repository_id: RepositoryId,
) -> Result<usize, StorageError> {
    if !store.table_exists("file_types")? {
        return Ok(0);
    }
    store
        .connection()
        .prepare_cached(
            "DELETE FROM file_types WHERE file_id IN
                 (SELECT f.id FROM files f WHERE f.repository_id = ?)",
        )
        .and_then(|mut stmt| stmt.execute(params![repository_id.0]))
        .map_err(|e| write_err("delete file_types", &e))
}

/// All records for `repository_id`, ordered by id.
pub fn records_for_repository(
    store: &FileTypesStore,
    repository_id: RepositoryId,
) -> Result<Vec<ClassificationRecord>, StorageError> {
    let mut stmt = store
        .connection()
        .prepare_cached(
            "SELECT ft.id, ft.file_id, ft.type FROM file_types ft, files f
             WHERE f.id = ft.file_id AND f.repository_id = ?
             ORDER BY ft.id",
        )
        .map_err(sqe)?;

    let rows = stmt
        .query_map(params![repository_id.0], |row| {
            Ok(ClassificationRecord {
                id: RecordId(row.get(0)?),
                entry_id: EntryId(row.get(1)?),
                file_type: row.get(2)?,
            })
        })
        .map_err(sqe)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(sqe)?);
    }
    Ok(result)
}

//! Provisioning of the `file_types` table and the indices the leaf query
//! relies on.
//!
//! The table is created without `IF NOT EXISTS`: an existing table is the
//! normal case on every run after the first and is reported as
//! `ProvisionResult::AlreadyExists`. Callers commit any open transaction
//! first, so the DDL runs in autocommit mode and a created table is durable
//! before any batch is written.

use repotype_core::errors::StorageError;
use repotype_core::types::ProvisionResult;
use tracing::{debug, info};

use crate::dialect::SqlFailure;
use crate::store::FileTypesStore;

/// Create `file_types` and its supporting indices.
pub fn ensure_schema(store: &FileTypesStore) -> Result<ProvisionResult, StorageError> {
    let result = create_table(store)?;
    ensure_indices(store)?;
    Ok(result)
}

/// Create `file_types`, mapping "already exists" to `AlreadyExists`.
pub fn create_table(store: &FileTypesStore) -> Result<ProvisionResult, StorageError> {
    let dialect = store.dialect();
    match store.connection().execute_batch(dialect.create_table_ddl()) {
        Ok(()) => {
            info!("created file_types table");
            Ok(ProvisionResult::Created)
        }
        Err(e) => {
            let failure = SqlFailure::from(&e);
            if dialect.is_duplicate_table_error(&failure) {
                debug!("file_types table already exists");
                Ok(ProvisionResult::AlreadyExists)
            } else {
                Err(StorageError::SchemaError {
                    object: "file_types".to_string(),
                    message: failure.message,
                })
            }
        }
    }
}

/// Create the `file_links(parent_id)` and `files(repository_id)` indices,
/// tolerating indices that already exist.
pub fn ensure_indices(store: &FileTypesStore) -> Result<(), StorageError> {
    let dialect = store.dialect();
    for (name, ddl) in dialect.create_index_ddl() {
        if let Err(e) = store.connection().execute_batch(ddl) {
            let failure = SqlFailure::from(&e);
            if !dialect.is_duplicate_index_error(&failure) {
                return Err(StorageError::SchemaError {
                    object: format!("index {name}"),
                    message: failure.message,
                });
            }
            debug!(index = name, "index already exists");
        }
    }
    Ok(())
}

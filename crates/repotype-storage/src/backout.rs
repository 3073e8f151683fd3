//! Removal of everything the pass wrote for one repository.

use repotype_core::errors::StorageError;
use repotype_core::types::identifiers::RepositoryId;
use tracing::info;

use crate::queries::file_types;
use crate::store::FileTypesStore;

/// Delete the repository's `file_types` rows. Table and indices stay.
///
/// Safe to repeat, and safe before the table was ever created; both cases
/// delete nothing.
pub fn backout_repository(
    store: &FileTypesStore,
    repository_id: RepositoryId,
) -> Result<usize, StorageError> {
    let deleted = file_types::delete_for_repository(store, repository_id)?;
    info!(repository_id = repository_id.0, deleted, "backed out file types");
    Ok(deleted)
}

//! Rows read and written by the classification pass.

use super::identifiers::{EntryId, RecordId, RepositoryId};

/// A leaf entry of a repository: no `file_links` row names it as parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafEntry {
    pub id: EntryId,
    pub name: String,
}

/// A row of the `file_types` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub id: RecordId,
    pub entry_id: EntryId,
    pub file_type: String,
}

/// Outcome of provisioning the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionResult {
    /// The table was created by this call.
    Created,
    /// The table was already there; prior classifications may exist.
    AlreadyExists,
}

/// Summary of one classification run over a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub repository_id: RepositoryId,
    pub provision: ProvisionResult,
    /// `MAX(file_types.id)` observed before the run, if the table had rows.
    pub seeded_from: Option<i64>,
    /// Leaf entries skipped because they were already classified.
    pub skipped: usize,
    /// Records written by this run.
    pub written: usize,
    /// Batches that produced at least one insert.
    pub batches: usize,
}

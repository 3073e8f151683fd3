//! The classification pass: provision, seed, resolve pending, then stream
//! leaf pages and write one batch per page.
//!
//! A transaction the host left open is committed before anything else, so
//! the table DDL and every batch run outside it. Each non-empty batch then
//! commits on its own. A failure part-way leaves the earlier batches in
//! place; the next run sees them through `already_classified` and skips them.

use repotype_core::config::PassConfig;
use repotype_core::errors::StorageError;
use repotype_core::traits::Classifier;
use repotype_core::types::identifiers::{EntryId, RepositoryId};
use repotype_core::types::{ClassificationRecord, FxHashSet, PassReport, ProvisionResult};
use tracing::{debug, info};

use crate::allocator::IdentityAllocator;
use crate::queries::file_types;
use crate::queries::leaves::LeafPager;
use crate::schema;
use crate::store::FileTypesStore;

/// Counters from `ClassificationPass::run`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    pub written: usize,
    pub skipped: usize,
    pub batches: usize,
}

/// Streams a repository's leaf entries and classifies those not yet stored.
pub struct ClassificationPass<'a, C: Classifier + ?Sized> {
    store: &'a FileTypesStore,
    classifier: &'a C,
    page_size: usize,
}

impl<'a, C: Classifier + ?Sized> ClassificationPass<'a, C> {
    pub fn new(store: &'a FileTypesStore, classifier: &'a C, page_size: usize) -> Self {
        Self { store, classifier, page_size }
    }

    /// Classify every leaf of `repository_id` whose id is not in `skip_set`.
    pub fn run(
        &self,
        allocator: &mut IdentityAllocator,
        repository_id: RepositoryId,
        skip_set: &FxHashSet<EntryId>,
    ) -> Result<PassStats, StorageError> {
        self.store.commit_pending()?;
        let mut stats = PassStats::default();
        let mut written_now: FxHashSet<EntryId> = FxHashSet::default();

        for page in LeafPager::new(self.store, repository_id, self.page_size) {
            let page = page?;
            let mut staged = Vec::new();

            for entry in page {
                if skip_set.contains(&entry.id) || written_now.contains(&entry.id) {
                    stats.skipped += 1;
                    continue;
                }
                let file_type = self.classifier.classify(&entry.name);
                staged.push(ClassificationRecord {
                    id: allocator.next_id(),
                    entry_id: entry.id,
                    file_type,
                });
            }

            if staged.is_empty() {
                continue;
            }

            let n = file_types::insert_file_types(self.store, &staged)?;
            written_now.extend(staged.iter().map(|r| r.entry_id));
            stats.written += n;
            stats.batches += 1;
            debug!(
                repository_id = repository_id.0,
                batch = stats.batches,
                rows = n,
                "committed file_types batch"
            );
        }

        Ok(stats)
    }
}

/// Full run for one repository: provision the table, seed the allocator
/// and collect already-classified entries if it pre-existed, then classify.
pub fn classify_repository<C: Classifier + ?Sized>(
    store: &FileTypesStore,
    classifier: &C,
    allocator: &mut IdentityAllocator,
    repository_id: RepositoryId,
    config: &PassConfig,
) -> Result<PassReport, StorageError> {
    store.commit_pending()?;
    let provision = schema::ensure_schema(store)?;

    let mut seeded_from = None;
    let skip_set = match provision {
        ProvisionResult::Created => FxHashSet::default(),
        ProvisionResult::AlreadyExists => {
            if let Some(max) = file_types::max_id(store)? {
                allocator.seed(max + 1);
                seeded_from = Some(max);
            }
            file_types::already_classified(store, repository_id)?
        }
    };
    debug!(
        repository_id = repository_id.0,
        already_classified = skip_set.len(),
        next_id = allocator.peek(),
        "resolved pending set"
    );

    let pass = ClassificationPass::new(store, classifier, config.effective_page_size());
    let stats = pass.run(allocator, repository_id, &skip_set)?;

    info!(
        repository_id = repository_id.0,
        written = stats.written,
        skipped = stats.skipped,
        batches = stats.batches,
        "file types pass complete"
    );

    Ok(PassReport {
        repository_id,
        provision,
        seeded_from,
        skipped: stats.skipped,
        written: stats.written,
        batches: stats.batches,
    })
}

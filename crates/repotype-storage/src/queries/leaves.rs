//! Leaf-entry queries with keyset pagination.
//!
//! A leaf is a `files` row that no `file_links` row names as parent. Pages
//! are ordered by `files.id` and resume after the last id seen, so writes to
//! `file_types` between pages cannot shift the window.

use repotype_core::errors::StorageError;
use repotype_core::types::identifiers::{EntryId, RepositoryId};
use repotype_core::types::LeafEntry;
use rusqlite::params;

use crate::store::{sqe, FileTypesStore};

/// One page of leaf entries of `repository_id` with `id > after_id`.
pub fn query_leaf_page(
    store: &FileTypesStore,
    repository_id: RepositoryId,
    after_id: Option<EntryId>,
    limit: usize,
) -> Result<Vec<LeafEntry>, StorageError> {
    let mut stmt = store
        .connection()
        .prepare_cached(
            "SELECT f.id, f.file_name FROM files f
             WHERE f.repository_id = ?
               AND f.id > ?
               AND NOT EXISTS (SELECT 1 FROM file_links l WHERE l.parent_id = f.id)
             ORDER BY f.id
             LIMIT ?",
        )
        .map_err(sqe)?;

    let after = after_id.map(EntryId::get).unwrap_or(i64::MIN);
    let rows = stmt
        .query_map(params![repository_id.0, after, limit as i64], |row| {
            Ok(LeafEntry {
                id: EntryId(row.get(0)?),
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            })
        })
        .map_err(sqe)?;

    let mut result = Vec::with_capacity(limit.min(1024));
    for row in rows {
        result.push(row.map_err(sqe)?);
    }
    Ok(result)
}

/// Lazy, finite sequence of leaf pages for one repository.
///
/// Stops after the first short page, or after the first error. A new pager
/// starts again from the beginning.
pub struct LeafPager<'a> {
    store: &'a FileTypesStore,
    repository_id: RepositoryId,
    page_size: usize,
    after: Option<EntryId>,
    done: bool,
}

impl<'a> LeafPager<'a> {
    pub fn new(store: &'a FileTypesStore, repository_id: RepositoryId, page_size: usize) -> Self {
        Self {
            store,
            repository_id,
            page_size: page_size.max(1),
            after: None,
            done: false,
        }
    }
}

impl Iterator for LeafPager<'_> {
    type Item = Result<Vec<LeafEntry>, StorageError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match query_leaf_page(self.store, self.repository_id, self.after, self.page_size) {
            Ok(page) => {
                if page.len() < self.page_size {
                    self.done = true;
                }
                let last = page.last()?;
                self.after = Some(last.id);
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> FileTypesStore {
        let store = FileTypesStore::open_in_memory().unwrap();
        store
            .connection()
            .execute_batch(
                "CREATE TABLE files (id INTEGER PRIMARY KEY, file_name TEXT, repository_id INTEGER);
                 CREATE TABLE file_links (id INTEGER PRIMARY KEY, parent_id INTEGER, file_id INTEGER);
                 INSERT INTO files VALUES (1, 'src', 1), (2, 'a.c', 1), (3, 'b.c', 1),
                                          (4, 'c.h', 1), (5, 'other.c', 2), (6, 'd.py', 1);
                 INSERT INTO file_links (parent_id, file_id) VALUES (1, 2), (1, 3), (1, 4);",
            )
            .unwrap();
        store
    }

    fn ids(pages: &[Vec<LeafEntry>]) -> Vec<Vec<i64>> {
        pages.iter().map(|p| p.iter().map(|e| e.id.0).collect()).collect()
    }

    #[test]
    fn directories_and_other_repositories_are_excluded() {
        let store = seeded_store();
        let page = query_leaf_page(&store, RepositoryId(1), None, 100).unwrap();
        let names: Vec<&str> = page.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.c", "b.c", "c.h", "d.py"]);
    }

    #[test]
    fn pager_yields_bounded_pages_in_order() {
        let store = seeded_store();
        let pages: Vec<Vec<LeafEntry>> = LeafPager::new(&store, RepositoryId(1), 2)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ids(&pages), vec![vec![2, 3], vec![4, 6]]);
    }

    #[test]
    fn exact_multiple_ends_with_empty_probe() {
        let store = seeded_store();
        let pages: Vec<Vec<LeafEntry>> = LeafPager::new(&store, RepositoryId(1), 4)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ids(&pages), vec![vec![2, 3, 4, 6]]);
    }

    #[test]
    fn empty_repository_yields_nothing() {
        let store = seeded_store();
        assert_eq!(LeafPager::new(&store, RepositoryId(99), 10).count(), 0);
    }

    #[test]
    fn query_error_is_yielded_once() {
        let store = FileTypesStore::open_in_memory().unwrap();
        let mut pager = LeafPager::new(&store, RepositoryId(1), 10);
        assert!(matches!(pager.next(), Some(Err(StorageError::SqliteError { .. }))));
        assert!(pager.next().is_none());
    }
}

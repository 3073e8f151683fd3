//! Property tests over random file trees.
//!
//! For any tree and page size:
//! 1. Every leaf of the repository gets exactly one record, non-leaves none.
//! 2. A second run writes nothing.
//! 3. Records added after growth have ids above every earlier id.

use proptest::prelude::*;

use repotype_core::config::PassConfig;
use repotype_core::types::identifiers::RepositoryId;
use repotype_core::FileTypeClassifier;
use repotype_storage::queries::file_types;
use repotype_storage::{classify_repository, FileTypesStore, IdentityAllocator};

const NAMES: &[&str] = &[
    "main.c", "README", "logo.png", "po", "de.po", "Makefile", "notes.txt", "src", "x.ogg",
    "blob", "app.glade", "dist.tar.gz",
];

/// One generated entry: name index, repository (1 or 2), optional parent
/// index among earlier entries of any repository.
#[derive(Debug, Clone)]
struct Node {
    name: usize,
    repository: i64,
    parent: Option<usize>,
}

fn tree_strategy(max_nodes: usize) -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec((0..NAMES.len(), 1..=2i64, any::<Option<prop::sample::Index>>()), 1..=max_nodes)
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (name, repository, parent))| Node {
                    name,
                    repository,
                    parent: if i == 0 { None } else { parent.map(|p| p.index(i)) },
                })
                .collect()
        })
}

fn setup(nodes: &[Node]) -> FileTypesStore {
    let store = FileTypesStore::open_in_memory().unwrap();
    store
        .connection()
        .execute_batch(
            "CREATE TABLE files (id INTEGER PRIMARY KEY, file_name TEXT, repository_id INTEGER);
             CREATE TABLE file_links (id INTEGER PRIMARY KEY, parent_id INTEGER, file_id INTEGER);",
        )
        .unwrap();
    insert_nodes(&store, nodes, 0);
    store
}

/// Insert `nodes` with file ids starting at `offset + 1`.
fn insert_nodes(store: &FileTypesStore, nodes: &[Node], offset: usize) {
    let conn = store.connection();
    for (i, node) in nodes.iter().enumerate() {
        let id = (offset + i + 1) as i64;
        conn.execute(
            "INSERT INTO files (id, file_name, repository_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![id, NAMES[node.name], node.repository],
        )
        .unwrap();
        if let Some(parent) = node.parent {
            conn.execute(
                "INSERT INTO file_links (parent_id, file_id) VALUES (?1, ?2)",
                rusqlite::params![(offset + parent + 1) as i64, id],
            )
            .unwrap();
        }
    }
}

fn leaves_of(store: &FileTypesStore, repository: i64) -> Vec<i64> {
    let mut stmt = store
        .connection()
        .prepare(
            "SELECT f.id FROM files f WHERE f.repository_id = ?1
             AND NOT EXISTS (SELECT 1 FROM file_links l WHERE l.parent_id = f.id)
             ORDER BY f.id",
        )
        .unwrap();
    stmt.query_map([repository], |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect()
}

fn classified_entries(store: &FileTypesStore, repository: i64) -> Vec<i64> {
    let mut entries: Vec<i64> = file_types::records_for_repository(store, RepositoryId(repository))
        .unwrap()
        .iter()
        .map(|r| r.entry_id.0)
        .collect();
    entries.sort();
    entries
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_leaf_classified_exactly_once(nodes in tree_strategy(40), page in 1usize..12) {
        let store = setup(&nodes);
        let classifier = FileTypeClassifier::new();
        let mut alloc = IdentityAllocator::new();
        let config = PassConfig { page_size: Some(page) };

        classify_repository(&store, &classifier, &mut alloc, RepositoryId(1), &config).unwrap();

        prop_assert_eq!(classified_entries(&store, 1), leaves_of(&store, 1));
        prop_assert!(classified_entries(&store, 2).is_empty());
    }

    #[test]
    fn second_run_writes_nothing(nodes in tree_strategy(40), page in 1usize..12) {
        let store = setup(&nodes);
        let classifier = FileTypeClassifier::new();
        let mut alloc = IdentityAllocator::new();
        let config = PassConfig { page_size: Some(page) };

        classify_repository(&store, &classifier, &mut alloc, RepositoryId(2), &config).unwrap();
        let before = file_types::records_for_repository(&store, RepositoryId(2)).unwrap();

        // Cold allocator, as in a fresh process.
        let mut cold = IdentityAllocator::new();
        let report = classify_repository(&store, &classifier, &mut cold, RepositoryId(2), &config).unwrap();

        prop_assert_eq!(report.written, 0);
        prop_assert_eq!(report.skipped, before.len());
        prop_assert_eq!(file_types::records_for_repository(&store, RepositoryId(2)).unwrap(), before);
    }

    #[test]
    fn growth_gets_ids_above_prior_maximum(
        first in tree_strategy(20),
        growth in tree_strategy(20),
        page in 1usize..8,
    ) {
        let store = setup(&first);
        let classifier = FileTypeClassifier::new();
        let config = PassConfig { page_size: Some(page) };
        let mut alloc = IdentityAllocator::new();
        classify_repository(&store, &classifier, &mut alloc, RepositoryId(1), &config).unwrap();
        let prior: Vec<_> = file_types::records_for_repository(&store, RepositoryId(1)).unwrap();
        let prior_max = prior.iter().map(|r| r.id.0).max().unwrap_or(0);

        // Growth parents only reference growth nodes, so earlier leaves stay leaves.
        insert_nodes(&store, &growth, first.len());
        let mut cold = IdentityAllocator::new();
        classify_repository(&store, &classifier, &mut cold, RepositoryId(1), &config).unwrap();

        let after = file_types::records_for_repository(&store, RepositoryId(1)).unwrap();
        for record in &prior {
            prop_assert!(after.contains(record));
        }
        for record in after.iter().filter(|r| !prior.contains(r)) {
            prop_assert!(record.id.0 > prior_max);
        }
        let mut ids: Vec<i64> = after.iter().map(|r| r.id.0).collect();
        ids.dedup();
        prop_assert_eq!(ids.len(), after.len());
        prop_assert_eq!(classified_entries(&store, 1), leaves_of(&store, 1));
    }
}

//! SQL dialect capabilities: DDL text and the error conditions the pass
//! treats specially.
//!
//! The store wraps a `rusqlite::Connection`, so SQLite is the one backend.
//! Statement text uses `?` placeholders, which rusqlite binds natively.

use rusqlite::ffi;

/// A backend failure reduced to what dialect checks need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFailure {
    /// SQLite extended result code.
    pub code: Option<i32>,
    pub message: String,
}

impl SqlFailure {
    pub fn new(code: Option<i32>, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl From<&rusqlite::Error> for SqlFailure {
    fn from(err: &rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg) => Self {
                code: Some(e.extended_code),
                message: msg.clone().unwrap_or_else(|| e.to_string()),
            },
            other => Self { code: None, message: other.to_string() },
        }
    }
}

/// Backend selected when the store handle is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
}

impl Dialect {
    /// `CREATE TABLE file_types`, without `IF NOT EXISTS` so that an existing
    /// table is reported by the backend.
    pub fn create_table_ddl(self) -> &'static str {
        match self {
            Self::Sqlite => {
                "CREATE TABLE file_types (
                    id INTEGER PRIMARY KEY,
                    file_id INTEGER REFERENCES files(id),
                    type TEXT
                )"
            }
        }
    }

    /// `(index name, DDL)` for the indices the leaf query relies on.
    pub fn create_index_ddl(self) -> [(&'static str, &'static str); 2] {
        [
            ("parent_id", "CREATE INDEX parent_id ON file_links(parent_id)"),
            ("repository_id", "CREATE INDEX repository_id ON files(repository_id)"),
        ]
    }

    /// Query returning one row when table `?1` exists.
    pub fn table_exists_query(self) -> &'static str {
        match self {
            Self::Sqlite => "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        }
    }

    pub fn is_duplicate_table_error(self, failure: &SqlFailure) -> bool {
        match self {
            Self::Sqlite => sqlite_already_exists(failure, "table"),
        }
    }

    pub fn is_duplicate_index_error(self, failure: &SqlFailure) -> bool {
        match self {
            Self::Sqlite => sqlite_already_exists(failure, "index"),
        }
    }

    pub fn is_primary_key_violation(self, failure: &SqlFailure) -> bool {
        match self {
            Self::Sqlite => failure.code == Some(ffi::SQLITE_CONSTRAINT_PRIMARYKEY),
        }
    }
}

// SQLite reports both "table X already exists" and "index X already exists"
// as a bare SQLITE_ERROR, so the message is the only discriminator.
fn sqlite_already_exists(failure: &SqlFailure, kind: &str) -> bool {
    matches!(failure.code, Some(ffi::SQLITE_ERROR) | None)
        && failure.message.starts_with(kind)
        && failure.message.ends_with("already exists")
}

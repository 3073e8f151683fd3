//! `FileTypesStore` — an open connection to the pipeline database plus the
//! dialect it speaks.
//!
//! All queries in this crate go through a `&FileTypesStore`. The handle is
//! opened by the host pipeline; the pass never opens or closes connections
//! on its own.

use std::path::{Path, PathBuf};
use std::time::Duration;

use repotype_core::config::StorageConfig;
use repotype_core::errors::StorageError;
use rusqlite::Connection;
use tracing::debug;

use crate::dialect::{Dialect, SqlFailure};

pub struct FileTypesStore {
    conn: Connection,
    dialect: Dialect,
    path: Option<PathBuf>,
}

impl FileTypesStore {
    /// Open a file-backed SQLite store and apply pragmas.
    pub fn open(path: &Path, config: &StorageConfig) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(sqe)?;
        let store = Self {
            conn,
            dialect: Dialect::Sqlite,
            path: Some(path.to_path_buf()),
        };
        store.apply_pragmas(config)?;
        debug!(path = %path.display(), "opened file-types store");
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(sqe)?;
        let store = Self { conn, dialect: Dialect::Sqlite, path: None };
        store.apply_pragmas(&StorageConfig::default())?;
        Ok(store)
    }

    /// Wrap a connection the host already configured.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn, dialect: Dialect::Sqlite, path: None }
    }

    fn apply_pragmas(&self, config: &StorageConfig) -> Result<(), StorageError> {
        self.conn
            .busy_timeout(Duration::from_millis(config.effective_busy_timeout_ms()))
            .map_err(sqe)?;
        self.conn
            .pragma_update(None, "foreign_keys", config.effective_foreign_keys())
            .map_err(sqe)?;
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Database file path (None for in-memory or wrapped connections).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn table_exists(&self, name: &str) -> Result<bool, StorageError> {
        self.conn
            .prepare_cached(self.dialect.table_exists_query())
            .and_then(|mut stmt| stmt.exists([name]))
            .map_err(sqe)
    }

    /// Commit a transaction the host left open on the connection. The pass
    /// writes in its own per-batch transactions, which cannot begin inside
    /// another one.
    pub fn commit_pending(&self) -> Result<(), StorageError> {
        if !self.conn.is_autocommit() {
            self.conn
                .execute_batch("COMMIT")
                .map_err(|e| write_err("commit open transaction", &e))?;
            debug!("committed transaction left open on the connection");
        }
        Ok(())
    }
}

// ─── Helpers: StorageError from rusqlite ────────────────────────────────────

pub(crate) fn sqe(e: impl std::fmt::Display) -> StorageError {
    StorageError::SqliteError { message: e.to_string() }
}

pub(crate) fn write_err(context: &str, e: &rusqlite::Error) -> StorageError {
    StorageError::WriteError {
        context: context.to_string(),
        message: SqlFailure::from(e).message,
    }
}

//! Store connection configuration.

use serde::{Deserialize, Serialize};

/// Pragmas applied when the store handle is opened.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite busy timeout in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
    /// Enforce `REFERENCES files(id)`. Default: true.
    pub foreign_keys: Option<bool>,
}

impl StorageConfig {
    pub fn effective_busy_timeout_ms(&self) -> u64 {
        self.busy_timeout_ms.unwrap_or(5000)
    }

    pub fn effective_foreign_keys(&self) -> bool {
        self.foreign_keys.unwrap_or(true)
    }
}

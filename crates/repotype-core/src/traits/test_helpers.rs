//! `RepositoryLocatorStub` — in-memory test double for `RepositoryLocator`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::ExtensionError;

use super::repository::RepositoryLocator;

/// Returns configured URIs per path; unconfigured paths resolve to their own
/// display string.
pub struct RepositoryLocatorStub {
    uris: Mutex<HashMap<PathBuf, String>>,
    failing: Mutex<bool>,
}

impl RepositoryLocatorStub {
    pub fn new() -> Self {
        Self {
            uris: Mutex::new(HashMap::new()),
            failing: Mutex::new(false),
        }
    }

    pub fn set_uri(&self, path: impl Into<PathBuf>, uri: &str) {
        self.uris.lock().unwrap().insert(path.into(), uri.to_string());
    }

    /// Make every lookup fail.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }
}

impl Default for RepositoryLocatorStub {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryLocator for RepositoryLocatorStub {
    fn uri_for_path(&self, path: &Path) -> Result<String, ExtensionError> {
        if *self.failing.lock().unwrap() {
            return Err(ExtensionError::Locator {
                path: path.display().to_string(),
                message: "stub configured to fail".to_string(),
            });
        }
        Ok(self
            .uris
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.display().to_string()))
    }
}

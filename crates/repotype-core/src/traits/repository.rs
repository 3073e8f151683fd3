//! `RepositoryLocator` trait — canonical URI lookup for a working copy.

use std::path::Path;

use crate::errors::ExtensionError;

/// Resolves a local working-copy path to the repository's canonical URI,
/// i.e. the value stored in `repositories.uri`.
pub trait RepositoryLocator {
    fn uri_for_path(&self, path: &Path) -> Result<String, ExtensionError>;
}

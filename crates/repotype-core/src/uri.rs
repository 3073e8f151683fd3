//! Repository URI helpers.

use std::path::PathBuf;

use crate::errors::ExtensionError;
use crate::traits::RepositoryLocator;

const FILE_SCHEME: &str = "file://";

/// True for `scheme://...` URIs other than `file://`.
pub fn uri_is_remote(uri: &str) -> bool {
    uri.contains("://") && !uri.starts_with(FILE_SCHEME)
}

/// Local path named by `uri`, or `None` for remote URIs.
pub fn uri_to_filename(uri: &str) -> Option<PathBuf> {
    if uri_is_remote(uri) {
        return None;
    }
    Some(PathBuf::from(uri.strip_prefix(FILE_SCHEME).unwrap_or(uri)))
}

/// Canonical repository URI for the `uri` the pipeline was invoked with.
///
/// Local paths go through the locator (a working copy knows its upstream
/// URI); remote URIs are already canonical.
pub fn resolve_repository_uri(
    locator: &dyn RepositoryLocator,
    uri: &str,
) -> Result<String, ExtensionError> {
    match uri_to_filename(uri) {
        Some(path) => locator.uri_for_path(&path),
        None => Ok(uri.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::test_helpers::RepositoryLocatorStub;

    #[test]
    fn remote_detection() {
        assert!(uri_is_remote("svn://example.org/repo"));
        assert!(uri_is_remote("https://example.org/repo.git"));
        assert!(!uri_is_remote("file:///srv/repo"));
        assert!(!uri_is_remote("/srv/repo"));
    }

    #[test]
    fn filename_conversion() {
        assert_eq!(uri_to_filename("file:///srv/repo"), Some(PathBuf::from("/srv/repo")));
        assert_eq!(uri_to_filename("/srv/repo"), Some(PathBuf::from("/srv/repo")));
        assert_eq!(uri_to_filename("git://example.org/r"), None);
    }

    #[test]
    fn local_paths_use_locator() {
        let locator = RepositoryLocatorStub::new();
        locator.set_uri("/srv/repo", "https://example.org/repo.git");
        let uri = resolve_repository_uri(&locator, "file:///srv/repo").unwrap();
        assert_eq!(uri, "https://example.org/repo.git");
    }

    #[test]
    fn remote_uris_pass_through() {
        let locator = RepositoryLocatorStub::new();
        locator.set_failing(true);
        let uri = resolve_repository_uri(&locator, "svn://example.org/trunk").unwrap();
        assert_eq!(uri, "svn://example.org/trunk");
    }

    #[test]
    fn locator_failure_propagates() {
        let locator = RepositoryLocatorStub::new();
        locator.set_failing(true);
        let err = resolve_repository_uri(&locator, "/srv/repo").unwrap_err();
        assert!(matches!(err, ExtensionError::Locator { .. }));
    }
}

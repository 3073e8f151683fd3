//! Host pipeline entry points.
//!
//! The pipeline runs passes by name through an `ExtensionRegistry`, handing
//! each an open store plus the repository URI it was invoked with.

use std::collections::BTreeMap;

use repotype_core::config::{PassConfig, RepotypeConfig};
use repotype_core::errors::{ExtensionError, StorageError};
use repotype_core::file_types::FileTypeClassifier;
use repotype_core::traits::{Classifier, RepositoryLocator};
use repotype_core::types::PassReport;
use repotype_core::uri::resolve_repository_uri;
use tracing::debug;

use crate::allocator::IdentityAllocator;
use crate::backout::backout_repository;
use crate::pass::classify_repository;
use crate::queries::repositories::repository_id_for_uri;
use crate::store::FileTypesStore;

/// A pipeline pass with a paired undo.
pub trait Extension {
    fn name(&self) -> &'static str;

    fn run(
        &mut self,
        repo: &dyn RepositoryLocator,
        uri: &str,
        store: &FileTypesStore,
    ) -> Result<(), ExtensionError>;

    fn backout(
        &mut self,
        repo: &dyn RepositoryLocator,
        uri: &str,
        store: &FileTypesStore,
    ) -> Result<(), ExtensionError>;
}

/// Classifies leaf files into coarse types, writing `file_types`.
pub struct FileTypes {
    classifier: Box<dyn Classifier>,
    allocator: IdentityAllocator,
    config: PassConfig,
    last_report: Option<PassReport>,
}

impl FileTypes {
    pub const NAME: &'static str = "FileTypes";

    pub fn new(classifier: Box<dyn Classifier>, config: PassConfig) -> Self {
        Self {
            classifier,
            allocator: IdentityAllocator::new(),
            config,
            last_report: None,
        }
    }

    /// Built-in heuristic plus configured rules.
    pub fn from_config(config: &RepotypeConfig) -> Result<Self, ExtensionError> {
        config.validate()?;
        let classifier = FileTypeClassifier::from_config(&config.classifier)?;
        Ok(Self::new(Box::new(classifier), config.pass.clone()))
    }

    /// Report of the most recent successful run.
    pub fn last_report(&self) -> Option<&PassReport> {
        self.last_report.as_ref()
    }

    pub fn allocator(&self) -> &IdentityAllocator {
        &self.allocator
    }

    fn run_for_repository(
        &mut self,
        repo_uri: &str,
        store: &FileTypesStore,
    ) -> Result<PassReport, StorageError> {
        let repository_id = repository_id_for_uri(store, repo_uri)?;
        classify_repository(
            store,
            self.classifier.as_ref(),
            &mut self.allocator,
            repository_id,
            &self.config,
        )
    }
}

impl Extension for FileTypes {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(
        &mut self,
        repo: &dyn RepositoryLocator,
        uri: &str,
        store: &FileTypesStore,
    ) -> Result<(), ExtensionError> {
        let repo_uri = resolve_repository_uri(repo, uri)?;
        let report = self
            .run_for_repository(&repo_uri, store)
            .map_err(|source| ExtensionError::Run {
                extension: Self::NAME.to_string(),
                source,
            })?;
        debug!(extension = Self::NAME, uri = %repo_uri, written = report.written, "extension run finished");
        self.last_report = Some(report);
        Ok(())
    }

    fn backout(
        &mut self,
        repo: &dyn RepositoryLocator,
        uri: &str,
        store: &FileTypesStore,
    ) -> Result<(), ExtensionError> {
        let wrap = |source| ExtensionError::Backout {
            extension: Self::NAME.to_string(),
            source,
        };
        let repo_uri = resolve_repository_uri(repo, uri)?;
        let repository_id = repository_id_for_uri(store, &repo_uri).map_err(wrap)?;
        backout_repository(store, repository_id).map_err(wrap)?;
        Ok(())
    }
}

/// Extensions by name, in name order.
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: BTreeMap<&'static str, Box<dyn Extension>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every extension this crate provides.
    pub fn with_defaults(config: &RepotypeConfig) -> Result<Self, ExtensionError> {
        let mut registry = Self::new();
        registry.register(Box::new(FileTypes::from_config(config)?));
        Ok(registry)
    }

    /// Add an extension, replacing any previous one with the same name.
    pub fn register(&mut self, extension: Box<dyn Extension>) {
        self.extensions.insert(extension.name(), extension);
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extensions.keys().copied()
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut (dyn Extension + 'static), ExtensionError> {
        self.extensions
            .get_mut(name)
            .map(|ext| ext.as_mut())
            .ok_or_else(|| ExtensionError::UnknownExtension(name.to_string()))
    }

    pub fn run(
        &mut self,
        name: &str,
        repo: &dyn RepositoryLocator,
        uri: &str,
        store: &FileTypesStore,
    ) -> Result<(), ExtensionError> {
        self.get_mut(name)?.run(repo, uri, store)
    }

    pub fn backout(
        &mut self,
        name: &str,
        repo: &dyn RepositoryLocator,
        uri: &str,
        store: &FileTypesStore,
    ) -> Result<(), ExtensionError> {
        self.get_mut(name)?.backout(repo, uri, store)
    }
}

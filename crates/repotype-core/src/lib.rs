//! # repotype-core
//!
//! Foundation crate for the repotype file-type pass.
//! Defines the domain types, traits, errors, config, tracing setup and the
//! default file-type heuristic. `repotype-storage` depends on this.

pub mod config;
pub mod errors;
pub mod file_types;
pub mod tracing;
pub mod traits;
pub mod types;
pub mod uri;

// Re-export the most commonly used types at the crate root.
pub use config::RepotypeConfig;
pub use errors::error_code::RepotypeErrorCode;
pub use errors::{ExtensionError, StorageError};
pub use file_types::FileTypeClassifier;
pub use traits::{Classifier, RepositoryLocator};
pub use types::collections::FxHashSet;
pub use types::identifiers::{EntryId, RecordId, RepositoryId};

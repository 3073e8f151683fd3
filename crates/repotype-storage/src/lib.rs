//! # repotype-storage
//!
//! SQLite persistence for the file-type pass: schema provisioning,
//! identity allocation, keyset paging over leaf entries, batched
//! classification writes and repository backout.

pub mod allocator;
pub mod backout;
pub mod dialect;
pub mod extension;
pub mod pass;
pub mod queries;
pub mod schema;
pub mod store;

pub use allocator::IdentityAllocator;
pub use backout::backout_repository;
pub use dialect::{Dialect, SqlFailure};
pub use extension::{Extension, ExtensionRegistry, FileTypes};
pub use pass::{classify_repository, ClassificationPass, PassStats};
pub use schema::ensure_schema;
pub use store::FileTypesStore;

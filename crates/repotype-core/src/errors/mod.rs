//! Error types for the repotype workspace.
//! Storage failures convert into `ExtensionError` at the host boundary.

pub mod error_code;
mod extension_error;
mod storage_error;

pub use extension_error::ExtensionError;
pub use storage_error::StorageError;

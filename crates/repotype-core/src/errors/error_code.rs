//! Stable error codes reported to the host pipeline.

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const WRITE_ERROR: &str = "WRITE_ERROR";
pub const REPOSITORY_NOT_FOUND: &str = "REPOSITORY_NOT_FOUND";
pub const IDENTITY_COLLISION: &str = "IDENTITY_COLLISION";
pub const LOCATOR_ERROR: &str = "LOCATOR_ERROR";
pub const UNKNOWN_EXTENSION: &str = "UNKNOWN_EXTENSION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to one of the codes above.
pub trait RepotypeErrorCode {
    fn error_code(&self) -> &'static str;
}

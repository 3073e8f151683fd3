pub mod collections;
pub mod identifiers;
pub mod records;

pub use collections::FxHashSet;
pub use records::{ClassificationRecord, LeafEntry, PassReport, ProvisionResult};

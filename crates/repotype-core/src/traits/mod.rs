//! Seams to the host pipeline's collaborators.

pub mod classifier;
pub mod repository;
pub mod test_helpers;

pub use classifier::Classifier;
pub use repository::RepositoryLocator;

//! Statement helpers, one module per table.

pub mod file_types;
pub mod leaves;
pub mod repositories;

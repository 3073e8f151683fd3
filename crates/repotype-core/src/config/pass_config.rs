//! Classification pass configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the classification pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PassConfig {
    /// Leaf entries fetched (and written) per batch. Default: 1000.
    pub page_size: Option<usize>,
}

impl PassConfig {
    /// Returns the effective page size, defaulting to 1000.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.filter(|&n| n > 0).unwrap_or(1000)
    }
}

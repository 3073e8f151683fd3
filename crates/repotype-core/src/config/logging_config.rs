//! Logging configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset. Default: "info".
    pub level: Option<String>,
    /// Emit JSON lines instead of the human-readable format. Default: false.
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(false)
    }
}

pub mod classifier_config;
pub mod logging_config;
pub mod pass_config;
pub mod storage_config;

use serde::{Deserialize, Serialize};

pub use classifier_config::{ClassifierConfig, ClassifierRule};
pub use logging_config::LoggingConfig;
pub use pass_config::PassConfig;
pub use storage_config::StorageConfig;

use crate::errors::ExtensionError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RepotypeConfig {
    pub pass: PassConfig,
    pub storage: StorageConfig,
    pub classifier: ClassifierConfig,
    pub logging: LoggingConfig,
}

impl RepotypeConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Reject values that would make a pass meaningless.
    pub fn validate(&self) -> Result<(), ExtensionError> {
        if self.pass.page_size == Some(0) {
            return Err(ExtensionError::Config(
                "pass.page_size must be greater than zero".to_string(),
            ));
        }
        for rule in &self.classifier.rules {
            if rule.file_type.trim().is_empty() {
                return Err(ExtensionError::Config(format!(
                    "classifier rule '{}' has an empty file_type",
                    rule.pattern
                )));
            }
            glob::Pattern::new(&rule.pattern).map_err(|e| {
                ExtensionError::Config(format!("invalid classifier pattern '{}': {e}", rule.pattern))
            })?;
        }
        Ok(())
    }
}

//! # Validator Configuration
//!
//! ```yaml
//! channels: [args, kwargs, slots, data]   # default: all four
//! max_violations: 20                      # null = report every violation
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stencil_core::Channel;

use crate::error::ValidatorError;

fn default_channels() -> BTreeSet<Channel> {
    Channel::ALL.into_iter().collect()
}

fn default_max_violations() -> Option<usize> {
    Some(20)
}

/// Settings for [`SchemaValidationExtension`](crate::SchemaValidationExtension).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Channels to validate. Declared schemas on other channels are ignored.
    #[serde(default = "default_channels")]
    pub channels: BTreeSet<Channel>,
    /// Maximum violations reported per failure; `None` reports all.
    #[serde(default = "default_max_violations")]
    pub max_violations: Option<usize>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            max_violations: default_max_violations(),
        }
    }
}

impl ValidatorConfig {
    /// Parse from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ValidatorError> {
        Self::parse(content, "<inline>")
    }

    /// Load from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ValidatorError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ValidatorError> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| ValidatorError::Config {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;
        if config.max_violations == Some(0) {
            return Err(ValidatorError::Config {
                path: origin.to_string(),
                reason: "max_violations must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    /// Whether `channel` is validated.
    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }
}

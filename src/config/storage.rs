//! Storage configuration module.
//!
//! This module defines where word files live and how they are named.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory that word files are saved to and loaded from
    pub directory: PathBuf,

    /// File extension appended to every stem, without the dot
    pub extension: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            extension: "txt".to_string(),
        }
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage directory cannot be empty".to_string(),
            ));
        }

        if self.extension.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage extension cannot be empty".to_string(),
            ));
        }

        if self.extension.starts_with('.')
            || self.extension.contains(std::path::is_separator)
        {
            return Err(ConfigError::ValidationError(format!(
                "Invalid storage extension: {}",
                self.extension
            )));
        }

        Ok(())
    }
}

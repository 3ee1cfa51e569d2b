//! Storage configuration from TOML (`[storage]` section)

use crate::storage::JsonFileIndexStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Path of the conversation index file
    pub index_file: Option<String>,
}

impl FileStorageConfig {
    /// Configured path, else the platform data directory, else the working directory
    pub fn index_path(&self) -> PathBuf {
        self.index_file
            .as_ref()
            .map(PathBuf::from)
            .or_else(JsonFileIndexStore::default_path)
            .unwrap_or_else(|| PathBuf::from(crate::storage::INDEX_FILE_NAME))
    }
}

//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "dirchat.log";

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Log file written while the TUI owns the terminal
    pub file: Option<String>,
}

impl FileLoggingConfig {
    /// Configured path, else `<data_dir>/dirchat/dirchat.log`
    pub fn log_path(&self) -> PathBuf {
        self.file
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| dirs::data_dir().map(|d| d.join("dirchat").join(LOG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
    }
}

//! JSON file store for the conversation index.
//!
//! The file holds one JSON array of `{"id": ..., "title": ...}` objects, the
//! whole list rewritten on every save. Reads are fail-soft: anything that is
//! not exactly that shape is logged and treated as an empty index.

use dirchat_application::ConversationIndexStore;
use dirchat_domain::StoredConversationRecord;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// File name used under the data directory
pub const INDEX_FILE_NAME: &str = "conversations.json";

#[derive(Error, Debug)]
enum IndexFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected shape: {0}")]
    Shape(String),
}

/// Conversation index persisted as a JSON file
pub struct JsonFileIndexStore {
    path: PathBuf,
}

impl JsonFileIndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data_dir>/dirchat/conversations.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("dirchat").join(INDEX_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<StoredConversationRecord>, IndexFileError> {
        let content = fs::read_to_string(&self.path)?;
        parse_records(&content)
    }

    fn write(&self, records: &[StoredConversationRecord]) -> Result<(), IndexFileError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Check the shape first so a wrong file is reported precisely, then convert.
fn parse_records(content: &str) -> Result<Vec<StoredConversationRecord>, IndexFileError> {
    let value: Value = serde_json::from_str(content)?;

    let Value::Array(items) = value else {
        return Err(IndexFileError::Shape("expected a JSON array".to_string()));
    };

    for (i, item) in items.iter().enumerate() {
        let has_string = |key: &str| item.get(key).is_some_and(Value::is_string);
        if !has_string("id") || !has_string("title") {
            return Err(IndexFileError::Shape(format!(
                "element {} needs string `id` and `title`",
                i
            )));
        }
    }

    Ok(serde_json::from_value(Value::Array(items))?)
}

impl ConversationIndexStore for JsonFileIndexStore {
    fn load(&self) -> Vec<StoredConversationRecord> {
        if !self.path.exists() {
            info!(
                "No conversation index at {}, starting empty",
                self.path.display()
            );
            return Vec::new();
        }

        match self.read() {
            Ok(records) => {
                debug!(
                    "Read {} records from {}",
                    records.len(),
                    self.path.display()
                );
                records
            }
            Err(e) => {
                warn!(
                    "Ignoring conversation index {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[StoredConversationRecord]) {
        if let Err(e) = self.write(records) {
            error!(
                "Failed to save conversation index {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

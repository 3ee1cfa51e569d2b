//! Storage adapters - conversation index persistence.
//!
//! Provides [`JsonFileIndexStore`], a JSON file implementation of the
//! [`ConversationIndexStore`](dirchat_application::ConversationIndexStore) port.

mod json_index;

pub use json_index::{INDEX_FILE_NAME, JsonFileIndexStore};

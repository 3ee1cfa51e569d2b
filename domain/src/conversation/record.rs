//! Conversation index: the locally remembered list of sessions

use super::entities::ConversationHistory;
use crate::core::string::truncate_utf16;
use serde::{Deserialize, Serialize};

/// Maximum number of UTF-16 code units of the first prompt kept in a title
pub const TITLE_MAX_UNITS: usize = 50;

/// Title given to a new record when the history has no user text
pub const NEW_CHAT_TITLE: &str = "New Chat";

/// Shown in place of an empty stored title
pub const UNTITLED_TITLE: &str = "Untitled Chat";

/// One known session, as listed in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConversationRecord {
    pub id: String,
    pub title: String,
}

impl StoredConversationRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Title to show in lists; an empty stored title reads as [`UNTITLED_TITLE`]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_TITLE
        } else {
            &self.title
        }
    }

    pub fn is_untitled(&self) -> bool {
        self.title.is_empty()
    }
}

/// Derive a sidebar title from a history.
///
/// Takes the first part of the first user turn, cut to [`TITLE_MAX_UNITS`]
/// UTF-16 code units, and always appends `"..."`. Returns `None` when there is no
/// such part.
pub fn derive_title(history: &ConversationHistory) -> Option<String> {
    history
        .first_user_text()
        .map(|text| format!("{}...", truncate_utf16(text, TITLE_MAX_UNITS)))
}

/// What [`ConversationIndex::upsert`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A record was appended at the end of the list
    Appended,
    /// An existing record was updated in place
    Updated { position: usize },
}

/// Ordered list of [`StoredConversationRecord`]s, unique by id.
///
/// Insertion order is display order. Records are never reordered or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationIndex {
    records: Vec<StoredConversationRecord>,
}

impl ConversationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from persisted records.
    ///
    /// Later duplicates of an id are dropped so the list stays unique.
    pub fn from_records(records: Vec<StoredConversationRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            if !index.contains(&record.id) {
                index.records.push(record);
            }
        }
        index
    }

    pub fn records(&self) -> &[StoredConversationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&StoredConversationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Record that `session_id` now has `history`.
    ///
    /// Unknown ids are appended with a title derived from the history (or
    /// [`NEW_CHAT_TITLE`]). Known ids keep their position; their title is
    /// re-derived, or left alone when the history yields none.
    pub fn upsert(&mut self, session_id: &str, history: &ConversationHistory) -> UpsertOutcome {
        let derived = derive_title(history);

        match self.position(session_id) {
            Some(position) => {
                if let Some(title) = derived {
                    self.records[position].title = title;
                }
                UpsertOutcome::Updated { position }
            }
            None => {
                let title = derived.unwrap_or_else(|| NEW_CHAT_TITLE.to_string());
                self.records
                    .push(StoredConversationRecord::new(session_id, title));
                UpsertOutcome::Appended
            }
        }
    }
}

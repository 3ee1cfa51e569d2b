//! Port for persisting the conversation index.
//!
//! The index is a convenience for reopening past sessions; losing it never
//! blocks chatting. Both methods are therefore infallible: implementations
//! log their own failures and degrade to "no records" / "not saved".

use dirchat_domain::StoredConversationRecord;

/// Persistent storage for the ordered list of known conversations.
pub trait ConversationIndexStore: Send + Sync {
    /// Read all records in display order.
    ///
    /// Returns an empty list when nothing is stored or the stored value is
    /// unreadable.
    fn load(&self) -> Vec<StoredConversationRecord>;

    /// Replace the stored list with `records`.
    fn save(&self, records: &[StoredConversationRecord]);
}

//! Read-only snapshot of the controller for the widgets

use dirchat_application::{
    ConversationController, ConversationIndexStore, ExchangeStatus, SessionClient,
};
use dirchat_domain::{ConversationHistory, StoredConversationRecord};

/// Everything the widgets read from the controller, borrowed for one frame
#[derive(Debug, Clone, Copy)]
pub struct ChatView<'a> {
    pub records: &'a [StoredConversationRecord],
    pub active_session_id: Option<&'a str>,
    pub history: &'a ConversationHistory,
    pub status: &'a ExchangeStatus,
    pub error: Option<&'a str>,
    pub directory_path: &'a str,
    pub prompt: &'a str,
    pub can_submit: bool,
}

impl<'a> ChatView<'a> {
    pub fn from_controller<S, P>(controller: &'a ConversationController<S, P>) -> Self
    where
        S: SessionClient + 'static,
        P: ConversationIndexStore + 'static,
    {
        Self {
            records: controller.records(),
            active_session_id: controller.active_session_id(),
            history: controller.history(),
            status: controller.status(),
            error: controller.error(),
            directory_path: controller.directory_path(),
            prompt: controller.prompt(),
            can_submit: controller.can_submit(),
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.status.is_idle()
    }

    /// Whether the "start a new conversation" hint replaces the history
    pub fn show_empty_state(&self) -> bool {
        self.history.is_empty() && !self.is_loading() && self.error.is_none()
    }

    pub fn is_active(&self, record: &StoredConversationRecord) -> bool {
        self.active_session_id == Some(record.id.as_str())
    }
}

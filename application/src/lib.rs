//! Application layer for dirchat
//!
//! This crate contains the conversation controller use case and the port
//! definitions its adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_index_store::ConversationIndexStore,
    session_client::{ExchangeError, SessionClient},
};
pub use use_cases::conversation_controller::{
    Completion, ControllerError, ConversationController, ExchangeKind, ExchangeStatus,
    InputField, PendingExchange, VALIDATION_MESSAGE,
};

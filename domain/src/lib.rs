//! Domain layer for dirchat
//!
//! This crate contains the conversation entities and wire value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A session is owned by the remote endpoint and identified by an opaque id.
//! Every exchange returns the **full** history of the session, so the client
//! never merges turns locally: it replaces what it displays.
//!
//! ## Conversation index
//!
//! The client keeps a small ordered list of `{id, title}` records, one per
//! session it has seen, so past conversations can be reopened from the sidebar.

pub mod conversation;
pub mod core;
pub mod exchange;

// Re-export commonly used types
pub use conversation::{
    entities::{ConversationHistory, ConversationPart, ConversationTurn, Role},
    record::{
        ConversationIndex, NEW_CHAT_TITLE, StoredConversationRecord, TITLE_MAX_UNITS,
        UNTITLED_TITLE, UpsertOutcome, derive_title,
    },
};
pub use core::string::{truncate_utf16, utf16_len};
pub use exchange::{SessionExchangeRequest, SessionExchangeResponse};

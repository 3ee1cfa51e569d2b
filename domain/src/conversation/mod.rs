//! Conversation domain.
//!
//! - [`entities::ConversationTurn`] - one turn returned by the endpoint
//! - [`entities::ConversationHistory`] - the ordered turns of one session
//! - [`record::ConversationIndex`] - the ordered list of known sessions

pub mod entities;
pub mod record;

//! Focus handling and key mapping
//!
//! The chat view has three focusable regions. Keys are mapped to an
//! [`Action`] according to the focused region; global keys (quit, new chat,
//! focus cycling, history scrolling) work everywhere.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// Focused region of the chat view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Conversation list
    Sidebar,
    /// Directory path input
    Directory,
    /// Prompt input
    #[default]
    Prompt,
}

impl Focus {
    /// Next region in Tab order
    pub fn next(self) -> Self {
        match self {
            Self::Sidebar => Self::Directory,
            Self::Directory => Self::Prompt,
            Self::Prompt => Self::Sidebar,
        }
    }

    /// Previous region in Tab order
    pub fn prev(self) -> Self {
        match self {
            Self::Sidebar => Self::Prompt,
            Self::Directory => Self::Sidebar,
            Self::Prompt => Self::Directory,
        }
    }

    /// Label for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Sidebar => "CHATS",
            Self::Directory => "DIR",
            Self::Prompt => "PROMPT",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Sidebar => Color::Blue,
            Self::Directory => Color::Yellow,
            Self::Prompt => Color::Green,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the application
    Quit,
    /// Start a new conversation
    NewChat,
    FocusNext,
    FocusPrev,
    /// Send the inputs as one turn
    Submit,
    /// Load the conversation selected in the sidebar
    LoadSelected,
    SelectUp,
    SelectDown,
    InsertChar(char),
    InsertNewline,
    /// Backspace
    DeleteBefore,
    /// Delete
    DeleteAt,
    CursorLeft,
    CursorRight,
    CursorLineStart,
    CursorLineEnd,
    /// Scroll the history towards older turns
    ScrollUp,
    /// Scroll the history towards newer turns
    ScrollDown,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on focus
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event for the given focus
    pub fn handle(focus: Focus, key: KeyEvent) -> Action {
        if let Some(action) = Self::handle_global(key) {
            return action;
        }

        match focus {
            Focus::Sidebar => Self::handle_sidebar(key),
            Focus::Directory => Self::handle_directory(key),
            Focus::Prompt => Self::handle_prompt(key),
        }
    }

    fn handle_global(key: KeyEvent) -> Option<Action> {
        let action = match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Esc, _) => Action::Quit,
            (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::NewChat,
            (KeyCode::Tab, _) => Action::FocusNext,
            (KeyCode::BackTab, _) => Action::FocusPrev,
            (KeyCode::PageUp, _) => Action::ScrollUp,
            (KeyCode::PageDown, _) => Action::ScrollDown,
            _ => return None,
        };
        Some(action)
    }

    fn handle_sidebar(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Action::SelectUp,
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Action::SelectDown,
            (KeyCode::Enter, _) => Action::LoadSelected,
            _ => Action::None,
        }
    }

    fn handle_directory(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => Action::Submit,
            _ => Self::handle_editing(key),
        }
    }

    fn handle_prompt(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => Action::Submit,
            (KeyCode::Enter, m) if m.intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) => {
                Action::InsertNewline
            }
            _ => Self::handle_editing(key),
        }
    }

    /// Keys shared by both text inputs
    fn handle_editing(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), m)
                if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::InsertChar(c)
            }
            (KeyCode::Backspace, _) => Action::DeleteBefore,
            (KeyCode::Delete, _) => Action::DeleteAt,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorLineStart,
            (KeyCode::End, _) => Action::CursorLineEnd,
            _ => Action::None,
        }
    }
}

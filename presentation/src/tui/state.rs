//! TUI-only state
//!
//! Conversation data lives in the controller. This holds what only the
//! terminal view needs: focus, cursors, sidebar selection and scrolling.

use super::mode::Focus;
use dirchat_application::InputField;

/// Lines moved per PageUp/PageDown
pub const PAGE_SCROLL_LINES: usize = 10;
/// Lines moved per mouse wheel step
pub const WHEEL_SCROLL_LINES: usize = 3;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Default)]
pub struct TuiState {
    pub focus: Focus,
    /// Byte cursor in the directory input
    pub directory_cursor: usize,
    /// Byte cursor in the prompt input
    pub prompt_cursor: usize,
    /// Keyboard selection in the sidebar
    pub sidebar_selected: usize,
    /// History scroll, counted in lines up from the bottom (0 = newest)
    pub history_scroll: usize,
    /// Advanced by the tick while an exchange is in flight
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input field behind the current focus
    pub fn focused_field(&self) -> Option<InputField> {
        match self.focus {
            Focus::Sidebar => None,
            Focus::Directory => Some(InputField::DirectoryPath),
            Focus::Prompt => Some(InputField::Prompt),
        }
    }

    pub fn cursor(&self, field: InputField) -> usize {
        match field {
            InputField::DirectoryPath => self.directory_cursor,
            InputField::Prompt => self.prompt_cursor,
        }
    }

    pub fn cursor_mut(&mut self, field: InputField) -> &mut usize {
        match field {
            InputField::DirectoryPath => &mut self.directory_cursor,
            InputField::Prompt => &mut self.prompt_cursor,
        }
    }

    // -- Sidebar --

    pub fn select_up(&mut self) {
        self.sidebar_selected = self.sidebar_selected.saturating_sub(1);
    }

    pub fn select_down(&mut self, record_count: usize) {
        if self.sidebar_selected + 1 < record_count {
            self.sidebar_selected += 1;
        }
    }

    // -- History scrolling --

    pub fn scroll_up(&mut self, lines: usize) {
        self.history_scroll = self.history_scroll.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.history_scroll = self.history_scroll.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.history_scroll = 0;
    }

    /// Forget cursors and scrolling after the inputs and history were cleared
    pub fn reset_view(&mut self) {
        self.directory_cursor = 0;
        self.prompt_cursor = 0;
        self.history_scroll = 0;
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

/// First record index shown in a sidebar with `visible` record rows, so
/// that `selected` stays in view.
pub fn sidebar_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(visible)
}

//! TUI widgets - ratatui components for the chat view
//!
//! Layout:
//! ┌── Sidebar ──┬── Header (4) ──────────────────────┐
//! │             ├── History (flex) ──────────────────┤
//! │             ├── Error banner (only with error) ──┤
//! │             ├── Directory input (3) ─────────────┤
//! │             ├── Prompt input (3..10) ────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod error_banner;
pub mod header;
pub mod history;
pub mod input;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 4;
const DIRECTORY_HEIGHT: u16 = 3;
/// Text lines the prompt grows to before it scrolls
const MAX_PROMPT_LINES: u16 = 8;
/// Narrowest main column kept next to the sidebar
const MIN_MAIN_WIDTH: u16 = 20;

/// Compute the main layout regions from a terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub sidebar: Rect,
    pub header: Rect,
    pub history: Rect,
    pub error: Option<Rect>,
    pub directory: Rect,
    pub prompt: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Compute the layout.
    ///
    /// `prompt_lines` is the number of text lines in the prompt; the prompt
    /// grows from 3 rows (1 line + borders) up to `MAX_PROMPT_LINES + 2`.
    /// `error_height` is the banner height including borders, 0 for none.
    pub fn compute(area: Rect, sidebar_width: u16, prompt_lines: u16, error_height: u16) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(area);

        let sidebar_width = sidebar_width.min(area.width.saturating_sub(MIN_MAIN_WIDTH));
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Fill(1)])
            .split(outer[0]);

        let prompt_height = prompt_lines.clamp(1, MAX_PROMPT_LINES) + 2;
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(error_height),
                Constraint::Length(DIRECTORY_HEIGHT),
                Constraint::Length(prompt_height),
            ])
            .split(columns[1]);

        Self {
            sidebar: columns[0],
            header: main[0],
            history: main[1],
            error: (error_height > 0).then_some(main[2]),
            directory: main[3],
            prompt: main[4],
            status_bar: outer[1],
        }
    }
}

//! Sidebar widget - stored conversations and the new-chat entry

use crate::tui::mode::Focus;
use crate::tui::state::{TuiState, sidebar_offset};
use crate::tui::view::ChatView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const ACTIVE_MARKER: &str = "▶ ";
const INACTIVE_MARKER: &str = "  ";

/// What a click on the sidebar landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    NewChat,
    Record(usize),
}

pub struct SidebarWidget<'a> {
    view: &'a ChatView<'a>,
    state: &'a TuiState,
}

impl<'a> SidebarWidget<'a> {
    pub fn new(view: &'a ChatView<'a>, state: &'a TuiState) -> Self {
        Self { view, state }
    }

    fn new_chat_line(&self) -> Line<'static> {
        let style = if self.view.is_loading() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };
        Line::from(vec![
            Span::styled("+ New Chat", style),
            Span::styled("  ^N", Style::default().fg(Color::DarkGray)),
        ])
    }
}

/// Rows below the new-chat entry available for records
fn record_rows(inner: Rect) -> usize {
    inner.height.saturating_sub(1) as usize
}

fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Map a click at (`column`, `row`) to a sidebar entry.
///
/// `selected` must be the selection used for the last render, since it
/// decides which records were scrolled into view.
pub fn hit_test(
    area: Rect,
    column: u16,
    row: u16,
    selected: usize,
    record_count: usize,
) -> Option<SidebarHit> {
    let inner = inner_area(area);
    if !inner.contains((column, row).into()) {
        return None;
    }

    let line = (row - inner.y) as usize;
    if line == 0 {
        return Some(SidebarHit::NewChat);
    }

    let index = sidebar_offset(selected, record_rows(inner)) + line - 1;
    (index < record_count).then_some(SidebarHit::Record(index))
}

impl<'a> Widget for SidebarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Sidebar;
        let border_style = if focused {
            Style::default().fg(Focus::Sidebar.color())
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversations ")
            .style(border_style);

        let inner = block.inner(area);
        let visible = record_rows(inner);
        let offset = sidebar_offset(self.state.sidebar_selected, visible);

        let mut lines = vec![self.new_chat_line()];
        for (index, record) in self
            .view
            .records
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
        {
            let active = self.view.is_active(record);
            let title = record.display_title();

            let mut style = if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            if focused && index == self.state.sidebar_selected {
                style = style.bg(Color::DarkGray);
            }

            let marker = if active { ACTIVE_MARKER } else { INACTIVE_MARKER };
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, title),
                style,
            )));
        }

        if self.view.records.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (no conversations yet)",
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

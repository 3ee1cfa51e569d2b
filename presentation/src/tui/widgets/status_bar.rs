//! Status bar widget - focus indicator, exchange status and key hints

use crate::tui::mode::Focus;
use crate::tui::state::TuiState;
use crate::tui::view::ChatView;
use dirchat_application::ExchangeStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    view: &'a ChatView<'a>,
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(view: &'a ChatView<'a>, state: &'a TuiState) -> Self {
        Self { view, state }
    }

    fn right_text(&self) -> String {
        match self.view.status {
            ExchangeStatus::Submitting => format!("{} Sending...", self.state.spinner()),
            ExchangeStatus::Loading { target } => {
                format!("{} Loading {}...", self.state.spinner(), target)
            }
            ExchangeStatus::Idle => match self.state.focus {
                Focus::Sidebar => {
                    "↑/↓:select  Enter:open  Tab:focus  ^N:new  Esc:quit".into()
                }
                Focus::Directory => {
                    "Enter:send  Tab:focus  PgUp/PgDn:scroll  Esc:quit".into()
                }
                Focus::Prompt => {
                    "Enter:send  Alt+Enter:newline  Tab:focus  ^N:new  Esc:quit".into()
                }
            },
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let focus = self.state.focus;

        // Left: focus indicator
        let focus_text = focus.indicator();
        let focus_style = Style::default()
            .fg(Color::Black)
            .bg(focus.color())
            .add_modifier(Modifier::BOLD);
        let focus_line = Line::from(Span::styled(format!(" {} ", focus_text), focus_style));
        let focus_width = focus_text.len() as u16 + 2; // padding

        buf.set_line(area.x, area.y, &focus_line, focus_width);

        // Right: exchange status or key hints, right-aligned
        let right_text = self.right_text();
        let right_style = if self.view.is_loading() {
            Style::default().fg(Color::Yellow).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + focus_width {
            let right_line = Line::from(Span::styled(right_text, right_style));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}

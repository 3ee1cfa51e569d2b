//! Input widget - directory path and prompt fields
//!
//! Supports multiline input: text is split on `\n` and rendered as
//! multiple `Line`s inside a `Paragraph`. The cursor is drawn as a
//! reversed cell while the field has focus and is editable.

use crate::tui::editor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const DIRECTORY_PLACEHOLDER: &str = "Directory path (optional)";
pub const NEW_PROMPT_PLACEHOLDER: &str = "Enter your prompt here...";
pub const CONTINUE_PROMPT_PLACEHOLDER: &str = "Continue the conversation...";

/// Send control drawn in the prompt's top border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendIndicator {
    pub loading: bool,
    pub enabled: bool,
}

impl SendIndicator {
    pub fn symbol(&self) -> &'static str {
        if self.loading { "..." } else { "→" }
    }
}

pub struct InputWidget<'a> {
    title: &'a str,
    text: &'a str,
    placeholder: &'a str,
    /// Byte cursor when the field has focus
    cursor: Option<usize>,
    editable: bool,
    color: Color,
    send: Option<SendIndicator>,
}

impl<'a> InputWidget<'a> {
    pub fn new(title: &'a str, text: &'a str, placeholder: &'a str) -> Self {
        Self {
            title,
            text,
            placeholder,
            cursor: None,
            editable: true,
            color: Color::Green,
            send: None,
        }
    }

    pub fn focused(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn send_indicator(mut self, send: SendIndicator) -> Self {
        self.send = Some(send);
        self
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active_cursor = self.cursor.filter(|_| self.editable);

        let border_style = if active_cursor.is_some() {
            Style::default().fg(self.color)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .style(border_style);

        if let Some(send) = self.send {
            let style = if send.enabled {
                Style::default().fg(self.color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            block = block.title_top(
                Line::from(Span::styled(format!(" {} ", send.symbol()), style)).right_aligned(),
            );
        }

        // Inner area height (excluding borders), used for scroll
        let inner_height = area.height.saturating_sub(2) as usize;

        let text_style = if self.editable {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut lines = match active_cursor {
            Some(cursor) => build_active_lines(self.text, cursor, self.color, self.placeholder),
            None => build_inactive_lines(self.text, text_style, self.placeholder),
        };

        // Scroll so the cursor line is visible
        let scroll_offset = match active_cursor {
            Some(cursor) if lines.len() > inner_height => {
                let cursor_line = editor::cursor_line(self.text, cursor);
                (cursor_line + 1).saturating_sub(inner_height)
            }
            _ => 0,
        };

        // Lines are not wrapped, so skipping them is the same as scrolling
        lines.drain(..scroll_offset.min(lines.len()));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

fn placeholder_span(placeholder: &str) -> Span<'static> {
    Span::styled(
        placeholder.to_string(),
        Style::default().fg(Color::DarkGray),
    )
}

/// Build lines for the focused field with cursor rendering
fn build_active_lines(
    text: &str,
    cursor_pos: usize,
    color: Color,
    placeholder: &str,
) -> Vec<Line<'static>> {
    let cursor_style = Style::default().fg(Color::Black).bg(color);

    if text.is_empty() {
        return vec![Line::from(vec![
            Span::styled(" ", cursor_style),
            placeholder_span(placeholder),
        ])];
    }

    let cursor_pos = editor::clamp(text, cursor_pos);
    let mut lines = Vec::new();
    let mut byte_offset = 0;

    // split() on "foo\n" gives ["foo", ""], so a trailing newline shows an empty line
    for line_text in text.split('\n') {
        let line_start = byte_offset;
        let line_end = line_start + line_text.len();

        if cursor_pos >= line_start && cursor_pos <= line_end {
            let local_cursor = cursor_pos - line_start;
            let before = &line_text[..local_cursor];
            let after = &line_text[local_cursor..];

            let mut spans = vec![Span::raw(before.to_string())];
            match after.chars().next() {
                // Cursor at end of line: block cursor on a space
                None => spans.push(Span::styled(" ", cursor_style)),
                Some(ch) => {
                    let ch_len = ch.len_utf8();
                    spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
                    if ch_len < after.len() {
                        spans.push(Span::raw(after[ch_len..].to_string()));
                    }
                }
            }
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(line_text.to_string()));
        }

        // Advance past the line content and its '\n'
        byte_offset = line_end + 1;
    }

    lines
}

/// Build lines for an unfocused or disabled field, no cursor
fn build_inactive_lines(text: &str, style: Style, placeholder: &str) -> Vec<Line<'static>> {
    if text.is_empty() {
        return vec![Line::from(placeholder_span(placeholder))];
    }

    text.split('\n')
        .map(|line_text| Line::from(Span::styled(line_text.to_string(), style)))
        .collect()
}

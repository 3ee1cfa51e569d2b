//! Error banner - the controller's error message above the inputs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Tallest banner, borders included
const MAX_BANNER_HEIGHT: u16 = 6;

/// Longest message prefix that is wrapped; more never fits in the banner
const MAX_MESSAGE_CHARS: usize = 2048;

pub struct ErrorBannerWidget<'a> {
    message: &'a str,
}

impl<'a> ErrorBannerWidget<'a> {
    /// Error bodies can be whole HTML pages, so only the head is kept.
    pub fn new(message: &'a str) -> Self {
        let message = match message.char_indices().nth(MAX_MESSAGE_CHARS) {
            Some((end, _)) => &message[..end],
            None => message,
        };
        Self { message }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let line = Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.message, Style::default().fg(Color::Red)),
        ]);
        Paragraph::new(line).wrap(Wrap { trim: false })
    }

    /// Rows needed to show the message at `width`, borders included
    pub fn height(&self, width: u16) -> u16 {
        let lines = self.paragraph().line_count(width.saturating_sub(2));
        let height = lines.saturating_add(2).min(usize::from(MAX_BANNER_HEIGHT));
        u16::try_from(height).unwrap_or(MAX_BANNER_HEIGHT)
    }
}

impl<'a> Widget for ErrorBannerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Red));
        self.paragraph().block(block).render(area, buf);
    }
}

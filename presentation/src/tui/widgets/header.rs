//! Header widget - application title and the local-use warning

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const APP_TITLE: &str = "Gemini Directory Processor";
pub const SECURITY_WARNING: &str = "File system access from a web request is highly insecure for production. This is for local testing only.";

pub struct HeaderWidget<'a> {
    endpoint: &'a str,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled("◉ ", Style::default().fg(Color::Green)),
                Span::styled(
                    APP_TITLE,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" | "),
                Span::styled(self.endpoint, Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::styled(
                    "Security Warning: ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(SECURITY_WARNING, Style::default().fg(Color::Red)),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" dirchat ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

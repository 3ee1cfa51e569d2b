//! History widget - the displayed conversation turns

use crate::tui::markdown::render_markdown;
use crate::tui::part_view::{PartView, classify_part};
use crate::tui::state::TuiState;
use crate::tui::view::ChatView;
use dirchat_application::ExchangeStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const EMPTY_STATE_TEXT: &str = "Start a new conversation by entering a prompt and/or directory path, or select one from the sidebar.";

const USER_LABEL: &str = "You";
const INDENT: &str = "  ";

pub struct HistoryWidget<'a> {
    view: &'a ChatView<'a>,
    state: &'a TuiState,
    model_label: &'a str,
}

impl<'a> HistoryWidget<'a> {
    pub fn new(view: &'a ChatView<'a>, state: &'a TuiState, model_label: &'a str) -> Self {
        Self {
            view,
            state,
            model_label,
        }
    }
}

/// Styled lines for the whole history, including the loading notice
pub fn history_lines(view: &ChatView<'_>, model_label: &str) -> Vec<Line<'static>> {
    if view.show_empty_state() {
        return vec![Line::from(Span::styled(
            EMPTY_STATE_TEXT,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines: Vec<Line<'static>> = Vec::new();

    for turn in view.history {
        let (label, color) = if turn.role.is_user() {
            (USER_LABEL, Color::Cyan)
        } else {
            (model_label, Color::Green)
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", label),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        for (index, part) in turn.parts.iter().enumerate() {
            match classify_part(&turn.role, index, &part.text) {
                summary @ PartView::FileSummary { .. } => {
                    let text = summary.summary_line().unwrap_or_default();
                    lines.push(Line::from(vec![
                        Span::raw(INDENT),
                        Span::styled(
                            text,
                            Style::default()
                                .fg(Color::DarkGray)
                                .add_modifier(Modifier::ITALIC),
                        ),
                    ]));
                }
                PartView::Markdown(text) => {
                    for line in render_markdown(text) {
                        let mut spans = vec![Span::raw(INDENT)];
                        spans.extend(line.spans);
                        lines.push(Line::from(spans));
                    }
                }
            }
        }
        lines.push(Line::from(""));
    }

    let notice = match view.status {
        ExchangeStatus::Idle => None,
        ExchangeStatus::Submitting => Some("Waiting for response..."),
        ExchangeStatus::Loading { .. } => Some("Loading conversation..."),
    };
    if let Some(notice) = notice {
        lines.push(Line::from(Span::styled(
            notice,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

/// Rows each line takes once wrapped to `width`
fn wrapped_heights(lines: &[Line<'static>], width: u16) -> Vec<usize> {
    lines
        .iter()
        .map(|line| {
            Paragraph::new(line.clone())
                .wrap(Wrap { trim: false })
                .line_count(width)
        })
        .collect()
}

impl<'a> Widget for HistoryWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = history_lines(self.view, self.model_label);
        let visible_height = usize::from(area.height.saturating_sub(2)); // borders
        let content_width = area.width.saturating_sub(2); // borders

        let heights = wrapped_heights(&lines, content_width);
        let total_lines: usize = heights.iter().sum();

        // history_scroll = 0 means "show bottom"
        let max_scroll = total_lines.saturating_sub(visible_height);
        let top = max_scroll - self.state.history_scroll.min(max_scroll);

        // Paragraph scrolls by u16, so whole lines above the viewport are
        // dropped first and only the remainder is scrolled.
        let mut skipped_rows = 0;
        let mut skipped_lines = 0;
        for height in &heights {
            if skipped_rows + height > top {
                break;
            }
            skipped_rows += height;
            skipped_lines += 1;
        }
        lines.drain(..skipped_lines);
        let scroll = u16::try_from(top - skipped_rows).unwrap_or(u16::MAX);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversation History ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirchat_domain::{ConversationHistory, ConversationPart, ConversationTurn, Role};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn screen(buf: &Buffer) -> Vec<String> {
        (buf.area.y..buf.area.bottom())
            .map(|y| row_text(buf, y))
            .collect()
    }

    fn view<'a>(
        history: &'a ConversationHistory,
        status: &'a ExchangeStatus,
        error: Option<&'a str>,
    ) -> ChatView<'a> {
        ChatView {
            records: &[],
            active_session_id: None,
            history,
            status,
            error,
            directory_path: "",
            prompt: "",
            can_submit: true,
        }
    }

    fn render(view: &ChatView<'_>, state: &TuiState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        HistoryWidget::new(view, state, "Gemini").render(area, &mut buf);
        buf
    }

    #[test]
    fn test_hello_exchange_shows_two_turns() {
        let history = ConversationHistory::from(vec![
            ConversationTurn::user("Hello"),
            ConversationTurn::model("Hi"),
        ]);
        let status = ExchangeStatus::Idle;
        let view = view(&history, &status, None);

        let rows = screen(&render(&view, &TuiState::new(), 40, 10));

        assert!(rows[1].contains("You:"));
        assert!(rows[2].contains("  Hello"));
        assert!(rows[4].contains("Gemini:"));
        assert!(rows[5].contains("  Hi"));
    }

    #[test]
    fn test_file_content_part_collapses_to_summary() {
        let files = "--- Start File: foo.txt ---\nline one\nline two\n--- End File: foo.txt ---";
        let history = ConversationHistory::from(vec![ConversationTurn {
            role: Role::User,
            parts: vec![ConversationPart::new(files), ConversationPart::new("Explain")],
        }]);
        let status = ExchangeStatus::Idle;
        let view = view(&history, &status, None);

        let lines = history_lines(&view, "Gemini");
        let rendered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        let expected = format!(
            "  [Content from files in directory 'directory' - {} characters included]",
            files.chars().count()
        );
        assert_eq!(rendered[1], expected);
        assert_eq!(rendered[2], "  Explain");
        assert!(!rendered.iter().any(|l| l.contains("line one")));
    }

    #[test]
    fn test_non_user_roles_use_model_label() {
        let history = ConversationHistory::from(vec![ConversationTurn {
            role: Role::Other("system".into()),
            parts: vec![ConversationPart::new("note")],
        }]);
        let status = ExchangeStatus::Idle;
        let view = view(&history, &status, None);

        let lines = history_lines(&view, "Assistant");
        assert_eq!(lines[0].to_string(), "Assistant:");
    }

    #[test]
    fn test_empty_state_only_when_idle_without_error() {
        let history = ConversationHistory::default();

        let idle = ExchangeStatus::Idle;
        let lines = history_lines(&view(&history, &idle, None), "Gemini");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), EMPTY_STATE_TEXT);

        let lines = history_lines(&view(&history, &idle, Some("boom")), "Gemini");
        assert!(lines.is_empty());

        let submitting = ExchangeStatus::Submitting;
        let lines = history_lines(&view(&history, &submitting, None), "Gemini");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), "Waiting for response...");
    }

    #[test]
    fn test_scroll_anchors_to_bottom() {
        let turns: Vec<ConversationTurn> = (0..10)
            .map(|i| ConversationTurn::user(format!("message {}", i)))
            .collect();
        let history = ConversationHistory::from(turns);
        let status = ExchangeStatus::Idle;
        let view = view(&history, &status, None);

        // 30 content lines, 6 visible
        let mut state = TuiState::new();
        let rows = screen(&render(&view, &state, 30, 8));
        assert!(rows[5].contains("message 9"));

        state.scroll_up(3);
        let rows = screen(&render(&view, &state, 30, 8));
        assert!(rows[4].contains("You:"));
        assert!(rows[5].contains("message 8"));

        // Scrolling past the top stops at the first line
        state.scroll_up(1000);
        let rows = screen(&render(&view, &state, 30, 8));
        assert!(rows[1].contains("You:"));
        assert!(rows[2].contains("message 0"));
    }

    #[test]
    fn test_reply_longer_than_u16_rows_still_reaches_bottom() {
        let mut reply: Vec<String> = (0..70_000).map(|i| format!("line {}", i)).collect();
        reply.push("LAST LINE".to_string());
        let history = ConversationHistory::from(vec![
            ConversationTurn::user("dump"),
            ConversationTurn::model(reply.join("\n")),
        ]);
        let status = ExchangeStatus::Idle;
        let view = view(&history, &status, None);

        let mut state = TuiState::new();
        let rows = screen(&render(&view, &state, 40, 10));
        // Last content row is the blank line after the turn
        assert!(rows[7].contains("LAST LINE"));
        assert!(rows[6].contains("line 69999"));

        state.scroll_up(4);
        let rows = screen(&render(&view, &state, 40, 10));
        assert!(rows[8].contains("line 69997"));

        state.scroll_up(usize::MAX / 2);
        let rows = screen(&render(&view, &state, 40, 10));
        assert!(rows[1].contains("You:"));
        assert!(rows[2].contains("dump"));
    }

    #[test]
    fn test_single_wrapped_line_scrolls_within_itself() {
        let long = "word ".repeat(40);
        let history = ConversationHistory::from(vec![ConversationTurn::model(long.trim_end())]);
        let status = ExchangeStatus::Idle;
        let view = view(&history, &status, None);

        let heights = wrapped_heights(&history_lines(&view, "Gemini"), 18);
        assert_eq!(heights[0], 1);
        assert!(heights[1] > 6);

        let mut state = TuiState::new();
        state.scroll_up(1);
        let rows = screen(&render(&view, &state, 20, 5));
        assert!(rows[3].contains("word"));
    }
}

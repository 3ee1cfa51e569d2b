//! Line-based markdown styling for the history panel.
//!
//! Covers what model replies usually contain: headings, bullet lists,
//! fenced code blocks and `**bold**` / `` `code` `` spans. Anything else is
//! shown as plain text.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const FENCE: &str = "```";

/// Convert markdown text into styled lines
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut in_code_block = false;
    let code_style = Style::default().fg(Color::DarkGray);

    for raw in text.lines() {
        let trimmed = raw.trim_start();

        if trimmed.starts_with(FENCE) {
            in_code_block = !in_code_block;
            lines.push(Line::from(Span::styled(raw.to_string(), code_style)));
            continue;
        }

        if in_code_block {
            lines.push(Line::from(Span::styled(raw.to_string(), code_style)));
            continue;
        }

        if let Some(heading) = heading_text(trimmed) {
            lines.push(Line::from(Span::styled(
                heading.to_string(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            continue;
        }

        if let Some(item) = bullet_text(trimmed) {
            let indent = &raw[..raw.len() - trimmed.len()];
            let mut spans = vec![Span::raw(format!("{}• ", indent))];
            spans.extend(inline_spans(item));
            lines.push(Line::from(spans));
            continue;
        }

        lines.push(Line::from(inline_spans(raw)));
    }

    lines
}

fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    line[hashes..].strip_prefix(' ').map(str::trim)
}

fn bullet_text(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("+ "))
}

/// Split a line into plain, bold and code spans.
///
/// An unmatched marker is kept as literal text.
fn inline_spans(line: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = line;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**")
            && let Some(end) = after.find("**")
        {
            flush_plain(&mut plain, &mut spans);
            spans.push(Span::styled(
                after[..end].to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            rest = &after[end + 2..];
            continue;
        }

        if let Some(after) = rest.strip_prefix('`')
            && let Some(end) = after.find('`')
        {
            flush_plain(&mut plain, &mut spans);
            spans.push(Span::styled(
                after[..end].to_string(),
                Style::default().fg(Color::Yellow),
            ));
            rest = &after[end + 1..];
            continue;
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            plain.push(c);
        }
        rest = chars.as_str();
    }

    flush_plain(&mut plain, &mut spans);
    spans
}

fn flush_plain(plain: &mut String, spans: &mut Vec<Span<'static>>) {
    if !plain.is_empty() {
        spans.push(Span::raw(std::mem::take(plain)));
    }
}

//! Cursor editing on an input buffer.
//!
//! The text lives in the controller; the TUI only keeps a byte cursor per
//! field. Every function clamps the cursor first, because the controller may
//! have replaced the text (a sent prompt is cleared) since the last edit.

/// Clamp `cursor` to the text length and back onto a char boundary
pub fn clamp(text: &str, cursor: usize) -> usize {
    let mut pos = cursor.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

pub fn insert_char(text: &mut String, cursor: &mut usize, c: char) {
    *cursor = clamp(text, *cursor);
    text.insert(*cursor, c);
    *cursor += c.len_utf8();
}

/// Backspace
pub fn delete_before(text: &mut String, cursor: &mut usize) {
    *cursor = clamp(text, *cursor);
    if let Some(prev) = text[..*cursor].chars().next_back() {
        *cursor -= prev.len_utf8();
        text.remove(*cursor);
    }
}

/// Delete
pub fn delete_at(text: &mut String, cursor: &mut usize) {
    *cursor = clamp(text, *cursor);
    if *cursor < text.len() {
        text.remove(*cursor);
    }
}

pub fn move_left(text: &str, cursor: &mut usize) {
    *cursor = clamp(text, *cursor);
    if let Some(prev) = text[..*cursor].chars().next_back() {
        *cursor -= prev.len_utf8();
    }
}

pub fn move_right(text: &str, cursor: &mut usize) {
    *cursor = clamp(text, *cursor);
    if let Some(next) = text[*cursor..].chars().next() {
        *cursor += next.len_utf8();
    }
}

/// Start of the line the cursor is on
pub fn move_line_start(text: &str, cursor: &mut usize) {
    *cursor = clamp(text, *cursor);
    *cursor = text[..*cursor].rfind('\n').map_or(0, |i| i + 1);
}

/// End of the line the cursor is on
pub fn move_line_end(text: &str, cursor: &mut usize) {
    *cursor = clamp(text, *cursor);
    *cursor = text[*cursor..]
        .find('\n')
        .map_or(text.len(), |i| *cursor + i);
}

/// Zero-based line index of the cursor
pub fn cursor_line(text: &str, cursor: usize) -> usize {
    text[..clamp(text, cursor)]
        .chars()
        .filter(|&c| c == '\n')
        .count()
}

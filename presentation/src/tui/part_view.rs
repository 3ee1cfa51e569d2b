//! How a single conversation part is shown in the history panel.
//!
//! The first part of a user turn may carry the concatenated contents of a
//! directory. Those parts collapse into one summary line instead of being
//! rendered in full.

use dirchat_domain::{Role, utf16_len};
use regex::Regex;
use std::sync::LazyLock;

/// Leading markers of a part that carries directory contents
pub const FILE_CONTENT_PREFIXES: [&str; 2] = [
    "Regarding the content of the files in the directory",
    "--- Start File:",
];

/// Name used when the directory cannot be read from the part text
pub const FALLBACK_DIRECTORY_NAME: &str = "directory";

static DIRECTORY_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^Regarding the content of the files in the directory '(.*?)':").ok()
});

/// Rendering decision for one part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartView<'a> {
    /// Directory contents, shown as a single summary line
    FileSummary {
        directory: String,
        char_count: usize,
    },
    /// Ordinary text, shown with markdown styling
    Markdown(&'a str),
}

impl PartView<'_> {
    /// Summary line for [`PartView::FileSummary`], `None` otherwise
    pub fn summary_line(&self) -> Option<String> {
        match self {
            PartView::FileSummary {
                directory,
                char_count,
            } => Some(file_summary_line(directory, *char_count)),
            PartView::Markdown(_) => None,
        }
    }
}

/// Decide how the part at `part_index` of a turn by `role` is shown.
///
/// Only the first part of a user turn is checked for directory contents.
/// The prefix test ignores leading whitespace; the name is matched on the
/// text as received, so indented text falls back to
/// [`FALLBACK_DIRECTORY_NAME`].
pub fn classify_part<'a>(role: &Role, part_index: usize, text: &'a str) -> PartView<'a> {
    if !role.is_user() || part_index != 0 {
        return PartView::Markdown(text);
    }

    let trimmed = text.trim_start();
    if !FILE_CONTENT_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
    {
        return PartView::Markdown(text);
    }

    let directory = DIRECTORY_NAME
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| FALLBACK_DIRECTORY_NAME.to_string());

    PartView::FileSummary {
        directory,
        char_count: utf16_len(text),
    }
}

pub fn file_summary_line(directory: &str, char_count: usize) -> String {
    format!(
        "[Content from files in directory '{}' - {} characters included]",
        directory, char_count
    )
}

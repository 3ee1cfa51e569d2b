//! Console output for `--list`

use colored::Colorize;
use dirchat_domain::StoredConversationRecord;

/// Formats stored conversations for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the conversation index, one record per line
    pub fn format_records(records: &[StoredConversationRecord]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Stored Conversations"));
        output.push('\n');

        if records.is_empty() {
            output.push_str(&format!("{}\n", "No conversations yet.".dimmed()));
            return output;
        }

        let id_width = records.iter().map(|r| r.id.chars().count()).max().unwrap_or(0);
        for (i, record) in records.iter().enumerate() {
            let title = if record.is_untitled() {
                record.display_title().dimmed().to_string()
            } else {
                record.title.clone()
            };
            output.push_str(&format!(
                "{:>3}. {}  {}\n",
                i + 1,
                format!("{:<width$}", record.id, width = id_width).yellow(),
                title
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Total:".cyan().bold(),
            records.len()
        ));
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!(
            "{}\n{}\n{}\n",
            line.cyan(),
            format!("  {}", title).cyan().bold(),
            line.cyan()
        )
    }
}

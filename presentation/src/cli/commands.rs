//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for dirchat
#[derive(Parser, Debug)]
#[command(name = "dirchat")]
#[command(author, version, about = "Terminal chat client for a local directory-aware session endpoint")]
#[command(long_about = r#"
dirchat sends prompts, optionally with a local directory path, to a session
endpoint and shows the full conversation it returns. Past conversations are
remembered in a small index file and listed in the sidebar.

Configuration files are loaded from (in priority order):
1. --config <path>                 Explicit config file
2. ./dirchat.toml                  Project-level config
3. ~/.config/dirchat/config.toml   Global config

Keys:
  Tab / Shift+Tab   move focus (sidebar, directory, prompt)
  Enter             send (inputs) or open conversation (sidebar)
  Alt+Enter         newline in the prompt
  Ctrl+N            new conversation
  PageUp/PageDown   scroll the history
  Esc / Ctrl+C      quit

Example:
  dirchat
  dirchat --endpoint http://localhost:7092/api/FileReader
  dirchat --list
"#)]
pub struct Cli {
    /// Session endpoint URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Conversation index file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub index_file: Option<PathBuf>,

    /// Log file used while the TUI is running (overrides config)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print stored conversations and exit
    #[arg(long)]
    pub list: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter directive for the verbosity level
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "dirchat",
            "--endpoint",
            "http://127.0.0.1:9000/api",
            "--index-file",
            "/tmp/index.json",
            "-vv",
        ]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://127.0.0.1:9000/api"));
        assert_eq!(cli.index_file, Some(PathBuf::from("/tmp/index.json")));
        assert_eq!(cli.log_level(), "debug");
        assert!(!cli.list);
    }

    #[test]
    fn test_default_log_level_is_warn() {
        let cli = Cli::parse_from(["dirchat"]);
        assert_eq!(cli.log_level(), "warn");
        let cli = Cli::parse_from(["dirchat", "-vvvv"]);
        assert_eq!(cli.log_level(), "trace");
    }
}

//! Presentation layer for dirchat
//!
//! This crate contains the CLI definition, the terminal chat interface,
//! and console output for non-interactive commands.

pub mod cli;
pub mod config;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::TuiConfig;
pub use output::console::ConsoleFormatter;
pub use tui::TuiApp;

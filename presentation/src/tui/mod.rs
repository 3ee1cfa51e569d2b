//! TUI (Text User Interface) module for dirchat
//!
//! A single chat view built with ratatui: the conversation list on the
//! left, the history and the two inputs on the right.

mod app;
mod editor;
mod event;
mod markdown;
mod mode;
mod part_view;
mod state;
mod view;
mod widgets;

pub use app::TuiApp;
pub use event::AppEvent;
pub use mode::{Action, Focus, KeyHandler};
pub use part_view::{PartView, classify_part, file_summary_line};
pub use state::TuiState;
pub use view::ChatView;
pub use widgets::MainLayout;

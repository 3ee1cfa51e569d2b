//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Raw TUI configuration from TOML
///
/// Unset fields keep the presentation layer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Width of the conversation sidebar in columns
    pub sidebar_width: Option<u16>,
    /// Label shown for model turns
    pub model_label: Option<String>,
}

//! Presentation-level configuration
//!
//! Settings the TUI reads while rendering.

use serde::{Deserialize, Serialize};

/// TUI configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Width of the conversation sidebar in columns
    pub sidebar_width: u16,
    /// Label shown for model turns
    pub model_label: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: 32,
            model_label: "Gemini".to_string(),
        }
    }
}

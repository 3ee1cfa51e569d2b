//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field is optional; missing values fall back to defaults.

mod endpoint;
mod logging;
mod storage;
mod tui;

pub use endpoint::FileEndpointConfig;
pub use logging::FileLoggingConfig;
pub use storage::FileStorageConfig;
pub use tui::FileTuiConfig;

use serde::{Deserialize, Serialize};

/// Narrowest sidebar that still shows a readable title
const MIN_SIDEBAR_WIDTH: u16 = 12;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session endpoint settings
    pub endpoint: FileEndpointConfig,
    /// Conversation index location
    pub storage: FileStorageConfig,
    /// Log file location
    pub logging: FileLoggingConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
}

impl FileConfig {
    /// Validate the configuration, returning one message per problem.
    ///
    /// Problems are warnings: the application still starts.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let url = self.endpoint.url.trim();
        if url.is_empty() {
            issues.push("endpoint.url: must not be empty".to_string());
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(format!(
                "endpoint.url: '{}' is not an http(s) URL",
                self.endpoint.url
            ));
        }

        if self.endpoint.timeout_seconds == Some(0) {
            issues.push("endpoint.timeout_seconds: 0 would fail every request".to_string());
        }

        if let Some(width) = self.tui.sidebar_width
            && width < MIN_SIDEBAR_WIDTH
        {
            issues.push(format!(
                "tui.sidebar_width: {} is narrower than {} columns",
                width, MIN_SIDEBAR_WIDTH
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
url = "http://127.0.0.1:9000/api/FileReader"
timeout_seconds = 45

[storage]
index_file = "/tmp/dirchat/index.json"

[logging]
file = "/tmp/dirchat/dirchat.log"

[tui]
sidebar_width = 40
model_label = "Model"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.endpoint.url, "http://127.0.0.1:9000/api/FileReader");
        assert_eq!(config.endpoint.timeout(), Some(Duration::from_secs(45)));
        assert_eq!(
            config.storage.index_path(),
            PathBuf::from("/tmp/dirchat/index.json")
        );
        assert_eq!(
            config.logging.log_path(),
            PathBuf::from("/tmp/dirchat/dirchat.log")
        );
        assert_eq!(config.tui.sidebar_width, Some(40));
        assert_eq!(config.tui.model_label.as_deref(), Some("Model"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config_uses_defaults() {
        let toml_str = r#"
[tui]
model_label = "Assistant"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.endpoint.url, "http://localhost:7092/api/FileReader");
        assert_eq!(config.endpoint.timeout(), None);
        assert_eq!(config.tui.sidebar_width, None);
        assert_eq!(config.tui.model_label.as_deref(), Some("Assistant"));
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_paths_end_with_file_names() {
        let config = FileConfig::default();
        assert!(config.storage.index_path().ends_with("conversations.json"));
        assert!(config.logging.log_path().ends_with("dirchat.log"));
    }

    #[test]
    fn test_validate_reports_bad_url_and_values() {
        let mut config = FileConfig::default();
        config.endpoint.url = "localhost:7092".to_string();
        config.endpoint.timeout_seconds = Some(0);
        config.tui.sidebar_width = Some(4);

        let issues = config.validate();

        assert_eq!(issues.len(), 3);
        assert!(issues[0].starts_with("endpoint.url"));
        assert!(issues[1].starts_with("endpoint.timeout_seconds"));
        assert!(issues[2].starts_with("tui.sidebar_width"));
    }

    #[test]
    fn test_validate_reports_empty_url() {
        let mut config = FileConfig::default();
        config.endpoint.url = "  ".to_string();
        assert_eq!(config.validate(), vec!["endpoint.url: must not be empty"]);
    }
}

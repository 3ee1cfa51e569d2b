//! Configuration file loading for dirchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./dirchat.toml` or `./.dirchat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/dirchat/config.toml`
//! 4. Default values
//!
//! Command-line flags are applied on top of the merged result by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileEndpointConfig, FileLoggingConfig, FileStorageConfig, FileTuiConfig,
};
pub use loader::ConfigLoader;

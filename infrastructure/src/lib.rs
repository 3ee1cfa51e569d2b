//! Infrastructure layer for dirchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileEndpointConfig, FileLoggingConfig, FileStorageConfig,
    FileTuiConfig,
};
pub use http::HttpSessionClient;
pub use storage::JsonFileIndexStore;

//! CLI entrypoint for dirchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dirchat_application::{ConversationController, ConversationIndexStore};
use dirchat_domain::ConversationIndex;
use dirchat_infrastructure::{ConfigLoader, FileConfig, HttpSessionClient, JsonFileIndexStore};
use dirchat_presentation::{Cli, ConsoleFormatter, TuiApp, TuiConfig};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let index_path = config.storage.index_path();

    // Non-interactive listing logs to stderr; the TUI owns the terminal
    if cli.list {
        init_stderr_logging(cli.log_level());
        report_config_issues(&config);

        let store = JsonFileIndexStore::new(&index_path);
        let index = ConversationIndex::from_records(store.load());
        print!("{}", ConsoleFormatter::format_records(index.records()));
        return Ok(());
    }

    let log_path = config.logging.log_path();
    let _guard = init_file_logging(cli.log_level(), &log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    report_config_issues(&config);

    info!("Starting dirchat");
    info!("Endpoint: {}", config.endpoint.url);
    info!("Conversation index: {}", index_path.display());

    // === Dependency Injection ===
    let client = Arc::new(
        HttpSessionClient::new(config.endpoint.url.clone(), config.endpoint.timeout())
            .context("Failed to build HTTP client")?,
    );
    let endpoint = client.endpoint().to_string();
    let store = Arc::new(JsonFileIndexStore::new(index_path));
    let controller = ConversationController::new(client, store);

    let mut app = TuiApp::new(controller, tui_config(&config)).with_endpoint(endpoint);
    app.run().await?;

    info!("dirchat finished");
    Ok(())
}

/// Command-line flags win over every config file
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.url = endpoint.clone();
    }
    if let Some(path) = &cli.index_file {
        config.storage.index_file = Some(path.display().to_string());
    }
    if let Some(path) = &cli.log_file {
        config.logging.file = Some(path.display().to_string());
    }
}

/// TUI settings from the `[tui]` section; unset fields keep the TUI defaults
fn tui_config(config: &FileConfig) -> TuiConfig {
    let mut tui = TuiConfig::default();
    if let Some(width) = config.tui.sidebar_width {
        tui.sidebar_width = width;
    }
    if let Some(label) = &config.tui.model_label {
        tui.model_label = label.clone();
    }
    tui
}

fn report_config_issues(config: &FileConfig) {
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }
}

fn init_stderr_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Send log events to `path` through a background writer.
///
/// The returned guard flushes pending events when dropped.
fn init_file_logging(level: &str, path: &Path) -> io::Result<WorkerGuard> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}

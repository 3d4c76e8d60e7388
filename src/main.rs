#![forbid(unsafe_code)]

mod config;
mod constants;
mod countdown;
mod edit;
mod gui;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::{CountdownConfig, LoadedSettings, SettingsStore};

/// Desktop widget counting down to a chosen day
#[derive(Debug, Parser)]
#[command(name = "countdown-widget", version, about)]
struct Cli {
    /// Settings file holding the countdown title and target date
    #[arg(long, value_name = "PATH", default_value = constants::settings::FILENAME)]
    settings: PathBuf,
}

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var(constants::logging::LEVEL_ENV)
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let store = SettingsStore::new(cli.settings);
    info!(path = %store.path().display(), "Using settings file");

    let loaded = store.load().unwrap_or_else(|err| {
        error!(error = ?err, "Failed to load settings, starting unconfigured");
        LoadedSettings::default()
    });
    let startup = CountdownConfig::resolve(loaded);
    info!(
        title = %startup.config.title,
        target_date = %startup.config.target_date,
        needs_setup = startup.needs_setup,
        "Starting countdown"
    );

    gui::run_gui(store, startup)
}

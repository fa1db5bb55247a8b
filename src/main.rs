#![forbid(unsafe_code)]

mod config;
mod constants;
mod desktop_entry;
mod event_handler;
mod gui;
mod hover;
mod icons;
mod launcher;
mod layout;
mod menu;
mod slots;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use config::ConfigStore;
use slots::SlotModel;

/// Nine-slot application launcher bar
#[derive(Debug, Parser)]
#[command(name = "desktop-hotbar", version, about)]
struct Cli {
    /// Configuration file (default: ~/.config/desktophotbar/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory containing hotbar.png and hotbar_selection.png
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn init_logging() -> Result<()> {
    let log_level = match std::env::var("LOG_LEVEL")
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

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install log subscriber")
}

#[cfg(unix)]
fn register_shutdown_signals(flag: &Arc<AtomicBool>) -> Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};

    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(flag))
            .with_context(|| format!("Failed to register handler for signal {signal}"))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn register_shutdown_signals(_flag: &Arc<AtomicBool>) -> Result<()> {
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging()?;

    let store = match cli.config {
        Some(path) => ConfigStore::at(path),
        None => ConfigStore::new(),
    };
    info!(path = %store.path().display(), "Using configuration file");
    let model = SlotModel::load(store);

    if cli.print_config {
        let json = serde_json::to_string_pretty(model.document()).context("Failed to serialize configuration")?;
        println!("{json}");
        return Ok(());
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    register_shutdown_signals(&shutdown)?;

    info!(
        scale = model.settings().scale,
        occupied = model.slots().occupied(),
        "Starting hotbar"
    );
    gui::run_gui(model, cli.assets, shutdown)?;
    Ok(())
}

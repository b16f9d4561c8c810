//! crtterm - a retro CRT-styled fake terminal
//!
//! Opens a window with a prompt over a granted folder. The folder is the
//! positional argument, else `terminal.directory` from the configuration,
//! else the current directory.

mod app;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use tracing::{debug, info, warn};

use crtterm::config::{Config, ConfigLoader, Theme};
use crtterm::settings::{FileSettings, MemorySettings, SettingsStore};
use crtterm::{bell, LocalDirectory, Session, SessionOptions, VERSION};

use app::{AppOptions, CrtTermApp};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "crtterm", version, about = "A retro CRT-styled fake terminal")]
struct Cli {
    /// Folder the terminal may list and read
    directory: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Theme for this run (not remembered)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Initial window width
    #[arg(long)]
    width: Option<f32>,

    /// Initial window height
    #[arg(long)]
    height: Option<f32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);
    info!("Starting crtterm v{}", VERSION);
    debug!("Debug mode enabled");

    let config = load_configuration(&cli)?;

    let directory_path = resolve_directory(&cli, &config)?;
    let directory = LocalDirectory::open(&directory_path)
        .with_context(|| format!("Cannot grant '{}'", directory_path.display()))?;
    info!("Granted directory: {}", directory_path.display());

    let (bell, bell_signal) = bell::from_style(config.terminal.bell_style);
    let options =
        SessionOptions::from_config(&config).with_theme_override(theme_override(&cli));
    let session = Session::new(options, Arc::new(directory), open_settings(), bell);

    let runtime = build_runtime()?;
    let app_options = AppOptions::from_config(&config);
    let native_options = create_native_options(&cli, &config);

    info!("Initializing GUI...");
    eframe::run_native(
        &config.ui.title,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(CrtTermApp::new(
                cc,
                session,
                runtime,
                app_options,
                bell_signal,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application failed: {}", e))?;

    info!("crtterm shutdown complete");
    Ok(())
}

/// `--debug` or `CRTTERM_DEBUG` select debug level; `RUST_LOG` wins over both
fn init_logging(debug: bool) {
    let debug_env = env::var("CRTTERM_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let log_level = if debug || debug_env { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Load configuration from file or use defaults
fn load_configuration(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    let config = loader
        .load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if loader.current_path().is_none() {
        debug!("Using default configuration");
    }
    Ok(config)
}

fn resolve_directory(cli: &Cli, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = cli.directory.clone().or_else(|| config.terminal.directory.clone()) {
        return Ok(dir);
    }
    env::current_dir().context("Cannot determine the current directory")
}

fn theme_override(cli: &Cli) -> Option<Theme> {
    let name = cli.theme.as_deref()?;
    match name.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(e) => {
            warn!("Ignoring --theme: {} (available: {})", e, Theme::available());
            None
        }
    }
}

/// Settings on disk, or in memory when there is nowhere to put them
fn open_settings() -> Box<dyn SettingsStore> {
    match FileSettings::open_default() {
        Ok(settings) => {
            debug!("Settings file: {}", settings.path().display());
            Box::new(settings)
        }
        Err(e) => {
            warn!("Theme changes will not be remembered: {}", e);
            Box::new(MemorySettings::new())
        }
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("crtterm-async")
        .enable_all()
        .build()
        .or_else(|e| {
            warn!("Failed to create multi-threaded runtime: {}, trying single-threaded", e);
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
        })
        .context("Cannot start the async runtime")
}

/// Create native options for the application window
fn create_native_options(cli: &Cli, config: &Config) -> eframe::NativeOptions {
    let (default_width, default_height) = config.ui.window_size;
    let width = cli.width.unwrap_or(default_width);
    let height = cli.height.unwrap_or(default_height);

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.ui.title.clone())
            .with_app_id("crtterm")
            .with_inner_size([width, height])
            .with_min_inner_size([400.0, 300.0])
            .with_resizable(true),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    }
}

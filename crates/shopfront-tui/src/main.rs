//! `shopfront`: terminal storefront for a product catalog API.
//!
//! Built on [ratatui](https://ratatui.rs). The catalog screen shows the
//! product collection as a card grid; the product screen shows a single
//! product's gallery and copy. Both fetch through `shopfront-core` and
//! render from the same (loading, error, data) state.
//!
//! Logs are written to a file (default under the user cache directory) to
//! avoid corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use shopfront_config::Config;
use shopfront_core::{Catalog, Route};

use crate::app::App;
use crate::event::Cadence;

/// Browse a product catalog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "shopfront", version, about)]
struct Cli {
    /// Catalog host URL (e.g., https://fakestoreapi.com)
    #[arg(short = 'H', long, env = "SHOPFRONT_HOST")]
    host: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long, env = "SHOPFRONT_TIMEOUT")]
    timeout: Option<u64>,

    /// Path to open at startup ("/" or "/product/{id}")
    #[arg(short = 'r', long, default_value = "/")]
    route: String,

    /// Log file path (defaults to the user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Overwrite an existing config file with --init-config
    #[arg(long, requires = "init_config")]
    force: bool,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr, that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(log_file: &Path, verbose: u8) -> WorkerGuard {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "shopfront={log_level},shopfront_core={log_level},shopfront_api={log_level}"
        ))
    });

    let log_dir = log_file
        .parent()
        .map_or_else(std::env::temp_dir, Path::to_path_buf);
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("shopfront.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Merge CLI overrides on top of the loaded config.
fn apply_overrides(cfg: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(ref host) = cli.host {
        shopfront_config::parse_host(host)?;
        cfg.catalog.host.clone_from(host);
    }
    if let Some(timeout) = cli.timeout {
        cfg.catalog.timeout_secs = timeout;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(shopfront_config::default_log_path);

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks(&log_file)?;

    if cli.init_config {
        let path =
            shopfront_config::init_config(cli.force).wrap_err("failed to write default config")?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    // Tracing to file; hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&log_file, cli.verbose);

    // Priority: CLI flags > env > config file > defaults
    let mut cfg = shopfront_config::load_config().wrap_err_with(|| {
        format!(
            "failed to load {}",
            shopfront_config::config_path().display()
        )
    })?;
    apply_overrides(&mut cfg, &cli)?;

    let route: Route = cli.route.parse()?;
    let catalog = Catalog::new(&cfg.to_catalog_config()?)?;

    info!(host = %catalog.host(), %route, "starting shopfront");

    let cadence = Cadence {
        tick: cfg.ui.tick_rate(),
        frame: cfg.ui.frame_rate(),
    };
    let mut app = App::new(catalog, route, cadence);
    app.run().await?;

    Ok(())
}

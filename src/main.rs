// Mission Board - satellite tracking dashboard for the terminal
//
// Pulls the satellite collection from a REST API and presents it four ways:
// a landing page, metric charts, a searchable history table and a catalog of
// live video feeds.
//
// Architecture:
// - Satellites: HTTP client, snapshot store and the pure derivation pipeline
//   (filter, sort, paginate, aggregate)
// - TUI (ratatui): views, components and the event loop
// - Config: env > ~/.config/mission-board/config.toml > defaults
// - Logging: tracing into an in-memory buffer (plus optional rolling files)

mod cli;
mod config;
mod logging;
mod satellites;
mod tui;
mod videos;

use anyhow::{Context, Result};
use config::{Config, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use satellites::SatelliteClient;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --path, --reset)
    if cli::handle_cli()? {
        return Ok(());
    }

    // A broken config file is fatal; report it before touching the terminal
    let config = Config::from_env()?;

    let log_buffer = LogBuffer::new();

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = init_tracing(&config.logging, &log_buffer);

    tracing::info!("Mission Board v{} starting", config::VERSION);

    let client = SatelliteClient::new(&config.api_base_url, config.request_timeout())
        .context("Failed to build HTTP client")?;
    tracing::info!("Satellite API: {}", client.satellites_url());

    tui::run_tui(config, client, log_buffer).await
}

/// Route tracing into the TUI log buffer, and optionally into rolling files
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(logging: &LoggingConfig, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("mission_board={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let file_writer = if logging.file_enabled {
        match logging.file_appender() {
            // Writes happen on a background thread
            Ok(appender) => Some(tracing_appender::non_blocking(appender)),
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    match file_writer {
        Some((non_blocking, guard)) => {
            // File layer uses JSON format for structured log parsing
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        }
    }
}

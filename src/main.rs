//! Predictraforge Server
//!
//! Run with: cargo run -- --port 8501
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the first of
//! `~/.config/predictraforge/config.toml`, `/etc/predictraforge/config.toml`,
//! `./config.toml`), then environment variables, then command-line flags.
//!
//! Environment variables:
//! - `PREDICTRAFORGE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PREDICTRAFORGE_PORT`: Port to listen on (default: 8501)
//! - `PREDICTRAFORGE_ANALYSIS_DELAY_MS`: Mock analysis delay (default: 2500)
//! - `PREDICTRAFORGE_LOG_LEVEL`: Log level (default: info)
//! - `PREDICTRAFORGE_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directive, overrides the log level

use anyhow::Context;
use clap::Parser;
use predictraforge::api::{serve, AppState};
use predictraforge::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "predictraforge")]
#[command(about = "Predictive maintenance demo dashboard", version)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            source: Some(path.clone()),
            failures: Vec::new(),
        },
        None => Config::load_default(),
    };

    if let Some(host) = cli.host {
        loaded.config.server.host = host;
    }
    if let Some(port) = cli.port {
        loaded.config.server.port = port;
    }

    init_tracing(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting Predictraforge v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        delay_ms = config.analysis.delay_ms,
        idle_timeout_secs = config.server.session_idle_timeout_secs,
        "Analysis and session settings"
    );

    let state = AppState::new(&config);

    // Start background session eviction
    let reaper = state.sessions.start_background_reaper(
        config.server.session_reap_interval(),
        config.server.session_idle_timeout(),
    );

    let result = serve(state).await;
    reaper.abort();

    result.context("server exited with an error")?;
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("predictraforge={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

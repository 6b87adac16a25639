//! Art catalog API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌───────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http::server (request id, trace, metrics,  │
//!                             │                 timeout)                     │
//!                             │       │                                      │
//!                             │       ▼                                      │
//!                             │   api handlers ──▶ catalog::query            │
//!                             │       │                 │                    │
//!     Client Response         │       ▼                 ▼                    │
//!     ◀───────────────────────┼── JSON / {"message"}   catalog::store       │
//!                             │                        (loaded at startup)  │
//!                             └───────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use art_catalog::config::resolve_config;
use art_catalog::lifecycle::startup;
use art_catalog::observability::init_logging;

#[derive(Parser)]
#[command(name = "art-catalog", version)]
#[command(about = "Read-only REST API over a static art catalog", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the catalog JSON files (overrides the config).
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
    }

    init_logging(&config.observability);

    tracing::info!("art-catalog v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        data_dir = %config.data.dir.display(),
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

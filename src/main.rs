//! Pokemon Shakespeare Description Service
//!
//! A small HTTP service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 POKESPEARE                    │
//!                    │                                               │
//!  GET /pokemon/{name}  ┌────────┐   ┌───────────────────────────┐  │
//!  ─────────────────────▶│  http  │──▶│   service (orchestrator)  │  │
//!                    │  │handlers│   │  caches + selection        │  │
//!                    │  └────────┘   └─────┬───────────────┬─────┘  │
//!                    │                     │               │        │
//!                    │                     ▼               ▼        │
//!                    │              ┌──────────┐    ┌────────────┐  │
//!                    │              │ upstream │    │  upstream  │  │
//!                    │              │ pokeapi  │    │shakespeare │  │
//!                    │              └────┬─────┘    └─────┬──────┘  │
//!                    └───────────────────┼────────────────┼─────────┘
//!                                        ▼                ▼
//!                                     PokeAPI      FunTranslations
//! ```

// Core subsystems
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod upstream;

// Cross-cutting concerns
pub mod observability;

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::loader::load_config;
use crate::config::ServiceConfig;
use crate::http::HttpServer;

#[derive(Parser)]
#[command(name = "pokespeare")]
#[command(about = "Shakespearean pokemon description service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults apply when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "pokespeare={},tower_http=info",
                config.observability.log_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("pokespeare v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        pokeapi_url = %config.upstream.pokeapi_url,
        translation_url = %config.upstream.translation_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            crate::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! profiles-api service entry point.

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use profiles_api::config::Config;
use profiles_api::server;

/// Minimal profile service exposing liveness and build-info endpoints.
#[derive(Parser, Debug)]
#[command(name = "profiles-api")]
#[command(about = "Minimal profile service exposing liveness and build-info endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Listen port (overrides the PORT environment variable).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("profiles_api=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load configuration
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = args.port {
        config.port = port;
    }

    server::run(&config).await.map_err(|e| {
        error!("Server error: {}", e);
        e
    })?;

    Ok(())
}

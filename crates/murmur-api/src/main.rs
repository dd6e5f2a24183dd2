//! Murmur API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p murmur-api
//! ```
//!
//! Configuration is loaded from environment variables; every variable has a
//! documented fallback default (see `murmur_common::config`).

use murmur_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // A failed startup (including an unreachable store) is fatal: exit
    // instead of serving traffic without a store connection.
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting murmur API server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Configuration loaded"
    );

    // Run the server
    murmur_api::run(config).await?;

    Ok(())
}

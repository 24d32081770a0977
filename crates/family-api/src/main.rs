//! Family API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p family-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored when present); the server listens on PORT, defaulting to 3000.

use family_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Family API Server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.server.port,
        family = %config.family.last_name,
        "Configuration loaded"
    );

    // Run the server
    family_api::run(config).await?;

    Ok(())
}

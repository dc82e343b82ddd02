//! Content API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p content-api
//! ```
//!
//! Configuration is loaded from environment variables, with `.env` support.

use content_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    // Initialize tracing (JSON output in production)
    let tracing_config = if std::env::var("APP_ENV")
        .is_ok_and(|v| v.eq_ignore_ascii_case("production"))
    {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting content API server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    // Run the server
    content_api::run(config).await?;

    Ok(())
}

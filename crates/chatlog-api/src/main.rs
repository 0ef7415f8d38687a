//! Chat log viewer entry point
//!
//! Run with:
//! ```bash
//! cargo run -p chatlog-api
//! ```
//!
//! Configuration comes from environment variables; a `.env` file is
//! honored when present.

use chatlog_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let tracing_config = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        TracingConfig::json()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting chat log viewer...");

    let config = AppConfig::from_env();
    info!(port = config.port, "Configuration loaded");

    chatlog_api::run(config).await
}

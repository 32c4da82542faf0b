use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::config::{AppConfig, SettingsManager};
use crate::services::log_buffer::LogBuffer;

/// Install the fmt subscriber plus the in-memory capture layer.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(logs: &LogBuffer) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(logs.layer())
        .init();
}

/// Load `.env` and the runtime config (fatal on error).
pub fn init_foundation() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();
    let sm = SettingsManager::from_env();
    let config = AppConfig::load(&sm)?;
    tracing::info!(
        server_port = config.server_port,
        ui_ws = %format!("{}:{}", config.ui_ws_host, config.ui_ws_port),
        "Settings loaded"
    );
    Ok(config)
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

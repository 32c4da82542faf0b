//! Headless push hub: serves `/ws/ui`, the notification API and the manage
//! row endpoints.

use ui_bridge_lib::app::SharedState;
use ui_bridge_lib::server;
use ui_bridge_lib::services::log_buffer::LogBuffer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logs = LogBuffer::default();
    ui_bridge_lib::init_tracing(&logs);

    tracing::info!("Starting UI push hub");

    let config = ui_bridge_lib::init_foundation()?;
    let state = SharedState::new(config, logs);

    let server_state = state.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server::start_server(server_state).await {
            tracing::error!("Server failed: {e}");
        }
    });

    tracing::info!(port = state.server_port(), "Push hub running. Press Ctrl+C to stop.");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    state.shutdown_token().cancel();
    let _ = server_handle.await;
    Ok(())
}

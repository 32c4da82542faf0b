use std::sync::Arc;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use ui_events::UiEvent;

use crate::config::AppConfig;
use crate::services::log_buffer::LogBuffer;

const WS_CHANNEL_CAPACITY: usize = 1024;

/// Application shared state accessible from axum handlers and background tasks.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Broadcast channel feeding every `/ws/ui` client
    ws_tx: broadcast::Sender<String>,
    config: AppConfig,
    logs: LogBuffer,
    shutdown: CancellationToken,
}

impl SharedState {
    pub fn new(config: AppConfig, logs: LogBuffer) -> Self {
        let (ws_tx, _) = broadcast::channel(WS_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(SharedStateInner {
                ws_tx,
                config,
                logs,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    pub fn subscribe_ws(&self) -> broadcast::Receiver<String> {
        self.inner.ws_tx.subscribe()
    }

    /// Number of connected UI sockets.
    pub fn client_count(&self) -> usize {
        self.inner.ws_tx.receiver_count()
    }

    /// Send an event to every connected UI socket. Returns how many received it.
    pub fn broadcast(&self, event: &UiEvent) -> Result<usize, serde_json::Error> {
        let text = event.to_json()?;
        // No receivers is not an error: nobody has the page open.
        Ok(self.inner.ws_tx.send(text).unwrap_or(0))
    }

    pub fn logs(&self) -> &LogBuffer {
        &self.inner.logs
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown
    }
}

//! UI socket listener.
//!
//! Connects to `ws://<host>:<port>/ws/ui`, decodes each text frame and
//! forwards notification events. Lost connections are re-established with
//! exponential backoff.

mod connection;
#[cfg(test)]
mod tests;

use std::time::Duration;

use tokio::sync::mpsc;
use url::Url;

use crate::protocol::UiEvent;
use crate::{UiEventsError, WS_UI_PATH};

const EVENT_CHANNEL_CAPACITY: usize = 256;
const BASE_BACKOFF: Duration = Duration::from_secs(2);
const MAX_BACKOFF: Duration = Duration::from_secs(60);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    pub url: Url,
}

impl ListenerConfig {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// `ws://{host}:{port}/ws/ui`
    pub fn for_host(host: &str, port: u16) -> Result<Self, UiEventsError> {
        let url = Url::parse(&format!("ws://{host}:{port}{WS_UI_PATH}"))?;
        Ok(Self { url })
    }
}

/// Why a connected session ended without an error.
enum SessionEnd {
    Shutdown,
    ConsumerGone,
    ServerClosed,
}

/// UI socket listener with auto-reconnect.
///
/// Events are delivered via `mpsc::Receiver<UiEvent>`. Sending on (or
/// dropping) the returned shutdown sender stops the loop.
pub struct NotificationListener;

impl NotificationListener {
    /// Start the listener loop. Returns an event receiver and shutdown sender.
    pub fn connect(
        config: ListenerConfig,
    ) -> Result<(mpsc::Receiver<UiEvent>, mpsc::Sender<()>), UiEventsError> {
        if !matches!(config.url.scheme(), "ws" | "wss") {
            return Err(UiEventsError::InvalidUrl(config.url.to_string()));
        }
        let (event_tx, event_rx) = mpsc::channel::<UiEvent>(EVENT_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        tokio::spawn(Self::run_loop(config, event_tx, shutdown_rx));
        Ok((event_rx, shutdown_tx))
    }

    async fn run_loop(
        config: ListenerConfig,
        event_tx: mpsc::Sender<UiEvent>,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        let mut failures: u32 = 0;
        loop {
            if shutdown_rx.try_recv().is_ok() {
                tracing::info!("UI listener shutdown requested");
                return;
            }

            let opened = tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::info!("UI listener shutdown requested while connecting");
                    return;
                }
                opened = tokio::time::timeout(CONNECT_TIMEOUT, Self::open(&config.url)) => {
                    opened.unwrap_or(Err(UiEventsError::ConnectTimeout(CONNECT_TIMEOUT)))
                }
            };

            match opened {
                Ok(ws) => {
                    failures = 0;
                    match Self::listen(ws, &event_tx, &mut shutdown_rx).await {
                        Ok(SessionEnd::Shutdown) => {
                            tracing::info!("UI listener shutdown during listen");
                            return;
                        }
                        Ok(SessionEnd::ConsumerGone) => {
                            tracing::info!("UI event receiver dropped, stopping listener");
                            return;
                        }
                        Ok(SessionEnd::ServerClosed) => {
                            tracing::warn!("UI socket closed by server");
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "UI socket failed");
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, url = %config.url, "UI socket connection failed");
                }
            }

            failures += 1;
            let backoff = Self::backoff_duration(failures);
            tracing::info!(
                attempt = failures,
                backoff_secs = backoff.as_secs(),
                "UI listener will reconnect"
            );
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::info!("UI listener shutdown requested during reconnect backoff");
                    return;
                }
                _ = tokio::time::sleep(backoff) => {}
            }
        }
    }

    fn backoff_duration(failures: u32) -> Duration {
        let d = BASE_BACKOFF * 2u32.saturating_pow(failures.saturating_sub(1));
        d.min(MAX_BACKOFF)
    }
}

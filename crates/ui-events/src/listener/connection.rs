use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as Msg;

use crate::protocol::{ProtocolError, decode_event};

use super::*;

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

impl NotificationListener {
    pub(super) async fn open(url: &Url) -> Result<WsStream, UiEventsError> {
        tracing::info!(url = %url, "Connecting to UI socket");
        let (ws, _) = connect_async(url.as_str()).await?;
        tracing::info!(url = %url, "UI socket connected");
        Ok(ws)
    }

    pub(super) async fn listen(
        mut ws: WsStream,
        event_tx: &mpsc::Sender<UiEvent>,
        shutdown_rx: &mut mpsc::Receiver<()>,
    ) -> Result<SessionEnd, UiEventsError> {
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    let _ = ws.close(None).await;
                    return Ok(SessionEnd::Shutdown);
                }
                msg = ws.next() => {
                    match msg {
                        Some(Ok(Msg::Text(text))) => {
                            let Some(event) = Self::decode_message(&text) else {
                                continue;
                            };
                            tokio::select! {
                                _ = shutdown_rx.recv() => {
                                    let _ = ws.close(None).await;
                                    return Ok(SessionEnd::Shutdown);
                                }
                                sent = event_tx.send(event) => {
                                    if sent.is_err() {
                                        let _ = ws.close(None).await;
                                        return Ok(SessionEnd::ConsumerGone);
                                    }
                                }
                            }
                        }
                        Some(Ok(Msg::Close(_))) | None => return Ok(SessionEnd::ServerClosed),
                        Some(Err(e)) => return Err(UiEventsError::WebSocket(e)),
                        // Pings are answered by tungstenite on the next read.
                        Some(Ok(_)) => {}
                    }
                }
            }
        }
    }

    /// Decode one text frame. Unknown and malformed messages yield `None`.
    pub(super) fn decode_message(text: &str) -> Option<UiEvent> {
        match decode_event(text) {
            Ok(event) => {
                tracing::debug!(event = event.name(), "UI event received");
                Some(event)
            }
            Err(ProtocolError::UnknownEvent(name)) => {
                tracing::debug!(event = %name, "Ignoring unhandled UI event");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dropping malformed UI message");
                None
            }
        }
    }
}

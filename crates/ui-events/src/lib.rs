//! UI push-notification client library.
//!
//! Decodes the `ws/ui` event envelope, converts notification markup to
//! toast text, and keeps a listener socket open with automatic reconnection.

pub mod listener;
pub mod markup;
pub mod protocol;
pub mod toast;

pub use listener::{ListenerConfig, NotificationListener};
pub use markup::to_toast_text;
pub use protocol::{NotificationData, ProtocolError, UiEvent, decode_event};
pub use toast::{Toast, ToastConfig, ToastKind, ToastRenderer, Toaster};

/// Path of the UI event socket on the server.
pub const WS_UI_PATH: &str = "/ws/ui";

/// Unified error type for the ui-events crate.
#[derive(Debug, thiserror::Error)]
pub enum UiEventsError {
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Not a WebSocket URL: {0}")]
    InvalidUrl(String),

    #[error("WebSocket handshake timed out after {0:?}")]
    ConnectTimeout(std::time::Duration),
}

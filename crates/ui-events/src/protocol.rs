//! The `{event, data}` envelope carried on the UI socket.

use serde::{Deserialize, Serialize};

pub const EVENT_NOTIFICATION: &str = "notification";

/// Payload of a `notification` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub body: String,
}

/// An event received from (or broadcast to) the UI socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum UiEvent {
    Notification(NotificationData),
}

impl UiEvent {
    pub fn notification(
        kind: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::Notification(NotificationData {
            kind: kind.into(),
            title: title.into(),
            body: body.into(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Notification(_) => EVENT_NOTIFICATION,
        }
    }

    /// Serialize to the wire envelope.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed envelope: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed {event} payload: {source}")]
    Payload {
        event: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown event: {0}")]
    UnknownEvent(String),
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    event: String,
    data: serde_json::Value,
}

/// Decode one socket message. Unknown event kinds are an error, not a silent drop;
/// the caller decides whether to ignore them.
pub fn decode_event(text: &str) -> Result<UiEvent, ProtocolError> {
    let raw: RawEnvelope = serde_json::from_str(text)?;
    match raw.event.as_str() {
        EVENT_NOTIFICATION => serde_json::from_value(raw.data)
            .map(UiEvent::Notification)
            .map_err(|source| ProtocolError::Payload {
                event: raw.event,
                source,
            }),
        _ => Err(ProtocolError::UnknownEvent(raw.event)),
    }
}

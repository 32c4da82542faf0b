//! Push a notification to every connected UI socket.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;
use ui_events::UiEvent;

use super::{ApiResult, err_json, ok_json};
use crate::app::SharedState;

fn default_kind() -> String {
    "notice".into()
}

#[derive(Debug, Deserialize)]
pub struct PostNotification {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// POST /api/notifications
pub async fn post_notification(
    State(state): State<SharedState>,
    Json(req): Json<PostNotification>,
) -> ApiResult {
    if req.title.trim().is_empty() {
        return Err(err_json(400, "title is required"));
    }

    let event = UiEvent::notification(req.kind, req.title, req.body);
    let clients = state
        .broadcast(&event)
        .map_err(|e| err_json(500, &e.to_string()))?;
    tracing::info!(clients, "Notification broadcast");

    Ok(ok_json(json!({ "clients": clients })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::services::log_buffer::LogBuffer;

    fn state() -> SharedState {
        SharedState::new(AppConfig::default(), LogBuffer::default())
    }

    fn request(kind: &str, title: &str, body: &str) -> PostNotification {
        PostNotification {
            kind: kind.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    #[tokio::test]
    async fn broadcasts_envelope_to_subscribers() {
        let state = state();
        let mut rx = state.subscribe_ws();

        let Json(resp) = post_notification(
            State(state.clone()),
            Json(request("success", "Snatched", "<b>S01E01</b>")),
        )
        .await
        .expect("ok");
        assert_eq!(resp["data"]["clients"], 1);

        let text = rx.recv().await.unwrap();
        assert_eq!(
            ui_events::decode_event(&text).unwrap(),
            UiEvent::notification("success", "Snatched", "<b>S01E01</b>")
        );
    }

    #[tokio::test]
    async fn no_clients_is_not_an_error() {
        let Json(resp) = post_notification(State(state()), Json(request("notice", "t", "")))
            .await
            .expect("ok");
        assert_eq!(resp["data"]["clients"], 0);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let (status, Json(body)) = post_notification(State(state()), Json(request("notice", "  ", "x")))
            .await
            .unwrap_err();
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
    }

    #[test]
    fn type_defaults_to_notice() {
        let req: PostNotification = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(req.kind, "notice");
        assert!(req.body.is_empty());
    }
}

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use ui_events::WS_UI_PATH;

use super::{api, websocket};
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        .route(WS_UI_PATH, get(websocket::ws_handler))
        // --- Notifications ---
        .route("/api/notifications", post(api::notifications::post_notification))
        // --- Manage page rows ---
        .route("/api/manage/episode-rows", post(api::manage::episode_rows))
        .route("/api/manage/subtitle-rows", post(api::manage::subtitle_rows))
        // --- Settings ---
        .route("/api/settings", get(api::settings::get_settings))
        // --- Logs ---
        .route("/api/logs", get(api::logs::get_logs))
        .route("/api/logs/clear", post(api::logs::clear_logs))
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler(
    axum::extract::State(state): axum::extract::State<SharedState>,
) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "clients": state.client_count(),
    }))
}

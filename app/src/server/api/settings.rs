use axum::extract::State;
use serde_json::json;

use super::{ApiResult, err_json, ok_json};
use crate::app::SharedState;
use crate::config::SettingsManager;

/// GET /api/settings — effective settings as seen by this process.
pub async fn get_settings(State(state): State<SharedState>) -> ApiResult {
    let settings = SettingsManager::from_env().get_all_settings();
    let value = serde_json::to_value(&settings).map_err(|e| err_json(500, &e.to_string()))?;
    Ok(ok_json(json!({
        "settings": value,
        "toast": state.config().toast_config(),
    })))
}

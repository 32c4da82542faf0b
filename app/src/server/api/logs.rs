//! Recent log lines captured from tracing.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::json;

use super::{ApiResult, ok_json};
use crate::app::SharedState;

const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub limit: Option<usize>,
}

/// GET /api/logs
pub async fn get_logs(State(state): State<SharedState>, Query(q): Query<LogQuery>) -> ApiResult {
    let limit = q.limit.unwrap_or(DEFAULT_LIMIT);
    let logs = state.logs().recent(limit);
    Ok(Json(json!({
        "logs": logs,
        "count": logs.len(),
        "limit": limit,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}

/// POST /api/logs/clear
pub async fn clear_logs(State(state): State<SharedState>) -> ApiResult {
    let cleared = state.logs().clear();
    Ok(ok_json(json!({ "cleared": cleared })))
}

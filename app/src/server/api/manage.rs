//! Row fragments for the episode management pages.

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use manage_rows::{EpisodeRow, SubtitleRow, render_rows};

use crate::app::SharedState;

/// POST /api/manage/episode-rows
pub async fn episode_rows(
    State(state): State<SharedState>,
    Json(rows): Json<Vec<EpisodeRow>>,
) -> Html<String> {
    let default_class = &state.config().manage_row_class;
    let rows = rows.into_iter().map(|mut row| {
        if row.row_class.trim().is_empty() {
            row.row_class = default_class.clone();
        }
        row
    });
    Html(render_rows(rows, |row| row.render()))
}

/// POST /api/manage/subtitle-rows
pub async fn subtitle_rows(Json(rows): Json<Vec<SubtitleRow>>) -> Html<String> {
    Html(render_rows(&rows, SubtitleRow::render))
}

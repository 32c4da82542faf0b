//! HTML table-row fragments for the episode management pages.
//!
//! Rows are built as a typed [`Node`] tree and rendered in one place, so the
//! markup for a row is stable for a given input.

pub mod html;
pub mod rows;

pub use html::{Element, Node};
pub use rows::{EpisodeRow, SubtitleRow, render_rows};

//! Episode and subtitle rows for the manage pages.
//!
//! `name` is inserted as-is: it comes from the show database and may already
//! carry entities. Identifiers are numeric, subtitle codes are escaped as
//! attribute values.

use serde::{Deserialize, Serialize};

use crate::html::{Element, Node};

const FLAG_DIR: &str = "images/subtitles/flags";
const NO_SUBTITLES: &str = "No subtitles";

/// One episode in the mass-update/episode-status table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRow {
    pub indexer_id: u64,
    pub season: i32,
    pub episode: i32,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    /// Status class for the row (`wanted`, `good`, ...).
    #[serde(default)]
    pub row_class: String,
}

/// One episode in the missed-subtitles table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleRow {
    pub indexer_id: u64,
    pub season: i32,
    pub episode: i32,
    pub name: String,
    /// Comma-separated language codes, empty when none are present.
    #[serde(default)]
    pub subtitles: String,
    #[serde(default)]
    pub checked: bool,
}

fn episode_checkbox(indexer_id: u64, season: i32, episode: i32, checked: bool) -> Element {
    Element::void("input")
        .attr("type", "checkbox")
        .attr("class", format!("{indexer_id}-epcheck"))
        .attr("name", format!("{indexer_id}-{season}x{episode}"))
        .flag("checked", checked)
}

impl EpisodeRow {
    pub fn render(&self) -> Node {
        Element::new("tr")
            .attr("class", format!("{} show-{}", self.row_class, self.indexer_id))
            .child(
                Element::new("td")
                    .attr("class", "tableleft")
                    .attr("align", "center")
                    .child(episode_checkbox(
                        self.indexer_id,
                        self.season,
                        self.episode,
                        self.checked,
                    )),
            )
            .child(Element::new("td").child(Node::text(format!("{}x{}", self.season, self.episode))))
            .child(
                Element::new("td")
                    .attr("class", "tableright")
                    .attr("style", "width: 100%")
                    .child(Node::raw(self.name.as_str())),
            )
            .into()
    }

    pub fn to_html(&self) -> String {
        self.render().to_html()
    }
}

impl SubtitleRow {
    /// Language codes in input order. Empty input yields nothing.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        let codes = if self.subtitles.is_empty() {
            None
        } else {
            Some(self.subtitles.split(','))
        };
        codes.into_iter().flatten()
    }

    pub fn render(&self) -> Node {
        let subtitles_cell = Element::new("td").attr("style", "width: 8%;");
        let subtitles_cell = if self.subtitles.is_empty() {
            subtitles_cell.child(Node::text(NO_SUBTITLES))
        } else {
            subtitles_cell.children(self.languages().flat_map(|code| {
                [
                    Node::from(
                        Element::void("img")
                            .attr("src", format!("{FLAG_DIR}/{code}.png"))
                            .attr("width", "16")
                            .attr("height", "11")
                            .attr("alt", code),
                    ),
                    Node::raw("&nbsp;"),
                ]
            }))
        };

        Element::new("tr")
            .attr("class", format!("good show-{}", self.indexer_id))
            .child(Element::new("td").attr("align", "center").child(episode_checkbox(
                self.indexer_id,
                self.season,
                self.episode,
                self.checked,
            )))
            .child(
                Element::new("td")
                    .attr("style", "width: 2%;")
                    .child(Node::text(format!("{}x{}", self.season, self.episode))),
            )
            .child(subtitles_cell)
            .child(Element::new("td").child(Node::raw(self.name.as_str())))
            .into()
    }

    pub fn to_html(&self) -> String {
        self.render().to_html()
    }
}

/// Concatenate rendered rows in input order.
pub fn render_rows<I, F>(rows: I, render: F) -> String
where
    I: IntoIterator,
    F: Fn(I::Item) -> Node,
{
    rows.into_iter().map(|row| render(row).to_html()).collect()
}

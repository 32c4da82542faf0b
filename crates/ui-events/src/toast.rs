//! Toast configuration and rendering.
//!
//! Configuration is an explicit value handed to [`Toaster::new`]; nothing is
//! changed per call.

use serde::{Deserialize, Serialize};

use crate::markup::to_toast_text;
use crate::protocol::UiEvent;

pub const DEFAULT_DELAY_MS: u64 = 5000;
pub const DEFAULT_WIDTH: &str = "340px";
pub const DEFAULT_ICON_URL: &str = "images/ico/favicon-120.png";

/// Severity of a toast. Unrecognised wire values fall back to `Notice`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Notice,
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn from_wire(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "info" => Self::Info,
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Notice,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Where new toasts appear and which way the stack grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackConfig {
    pub dir1: StackDirection,
    pub dir2: StackDirection,
    pub firstpos1: u32,
    pub firstpos2: u32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            dir1: StackDirection::Up,
            dir2: StackDirection::Left,
            firstpos1: 25,
            firstpos2: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub enabled: bool,
    pub icon: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            icon: DEFAULT_ICON_URL.into(),
        }
    }
}

/// Process-wide toast settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    pub addclass: String,
    pub stack: StackConfig,
    pub delay_ms: u64,
    pub hide: bool,
    pub history: bool,
    pub shadow: bool,
    pub closer_hover: bool,
    pub styling: String,
    pub width: String,
    pub desktop: DesktopConfig,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            addclass: "stack-bottomright".into(),
            stack: StackConfig::default(),
            delay_ms: DEFAULT_DELAY_MS,
            hide: true,
            history: false,
            shadow: false,
            closer_hover: false,
            styling: "jqueryui".into(),
            width: DEFAULT_WIDTH.into(),
            desktop: DesktopConfig::default(),
        }
    }
}

impl ToastConfig {
    /// Width in characters for text renderers, from a `"NNNpx"` width at ~8px per column.
    pub fn text_columns(&self) -> usize {
        self.width
            .trim()
            .trim_end_matches("px")
            .parse::<usize>()
            .map(|px| (px / 8).max(20))
            .unwrap_or(42)
    }
}

/// A toast ready for display. `kind` is the wire type, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: String,
    pub title: String,
    pub text: String,
}

impl Toast {
    pub fn level(&self) -> ToastKind {
        ToastKind::from_wire(&self.kind)
    }
}

/// Shows toasts somewhere (terminal, log, test recorder).
pub trait ToastRenderer {
    fn render(&self, config: &ToastConfig, toast: &Toast);
}

impl<R: ToastRenderer + ?Sized> ToastRenderer for std::sync::Arc<R> {
    fn render(&self, config: &ToastConfig, toast: &Toast) {
        (**self).render(config, toast)
    }
}

pub struct Toaster<R> {
    config: ToastConfig,
    renderer: R,
}

impl<R: ToastRenderer> Toaster<R> {
    pub fn new(config: ToastConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Convert `message` markup and render a toast. Returns what was rendered.
    pub fn display(&self, kind: &str, title: &str, message: &str) -> Toast {
        let toast = Toast {
            kind: kind.to_string(),
            title: title.to_string(),
            text: to_toast_text(message),
        };
        self.renderer.render(&self.config, &toast);
        toast
    }

    pub fn handle_event(&self, event: &UiEvent) -> Option<Toast> {
        match event {
            UiEvent::Notification(data) => Some(self.display(&data.kind, &data.title, &data.body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        shown: Mutex<Vec<Toast>>,
    }

    impl ToastRenderer for Recorder {
        fn render(&self, _config: &ToastConfig, toast: &Toast) {
            self.shown.lock().expect("lock").push(toast.clone());
        }
    }

    #[test]
    fn defaults_match_page_setup() {
        let config = ToastConfig::default();
        assert_eq!(config.delay_ms, 5000);
        assert_eq!(config.width, "340px");
        assert!(!config.history);
        assert!(!config.closer_hover);
        assert!(config.hide);
        assert_eq!(config.addclass, "stack-bottomright");
        assert_eq!(config.stack.dir1, StackDirection::Up);
        assert_eq!(config.stack.dir2, StackDirection::Left);
        assert_eq!(config.desktop.icon, DEFAULT_ICON_URL);
    }

    #[test]
    fn notification_event_forwards_type_title_and_converted_body() {
        let toaster = Toaster::new(ToastConfig::default(), Recorder::default());
        let event = UiEvent::notification("error", "Download <b>failed</b>", "Show<br>S01E02");

        toaster.handle_event(&event);

        let shown = toaster.renderer().shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, "error");
        assert_eq!(shown[0].title, "Download <b>failed</b>");
        assert_eq!(shown[0].text, "Show\nS01E02");
    }

    #[test]
    fn unknown_kind_is_kept_but_levels_as_notice() {
        let toaster = Toaster::new(ToastConfig::default(), Recorder::default());
        let toast = toaster.display("warning", "t", "b");
        assert_eq!(toast.kind, "warning");
        assert_eq!(toast.level(), ToastKind::Notice);
        assert_eq!(ToastKind::from_wire(" Success "), ToastKind::Success);
        assert_eq!(ToastKind::default(), ToastKind::Notice);
    }

    #[test]
    fn text_columns_from_pixel_width() {
        assert_eq!(ToastConfig::default().text_columns(), 42);
        let narrow = ToastConfig {
            width: "80px".into(),
            ..ToastConfig::default()
        };
        assert_eq!(narrow.text_columns(), 20);
        let odd = ToastConfig {
            width: "30em".into(),
            ..ToastConfig::default()
        };
        assert_eq!(odd.text_columns(), 42);
    }
}

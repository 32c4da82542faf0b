//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("SERVER_HOST", "0.0.0.0", "Address the push hub binds to"),
    ("SERVER_PORT", "8081", "Port of the push hub HTTP/WebSocket server"),
    ("UI_WS_HOST", "127.0.0.1", "Host the listener connects to"),
    ("UI_WS_PORT", "8081", "Port the listener connects to"),
    ("TOAST_DELAY_MS", "5000", "How long a page toast stays visible (console output is not timed)"),
    ("TOAST_WIDTH", "340px", "Toast width"),
    ("MANAGE_ROW_CLASS", "wanted", "Row class used when a row does not name one"),
    ("UI_DEMO_TOAST", "false", "Show a sample toast when the listener starts"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Setting keys in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|&(key, _, _)| key)
}

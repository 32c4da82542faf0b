//! Notification body markup → plain toast text.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

static RE_BR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br[\s/]*(?:\s[^>]*)?>").unwrap());
static RE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?b(?:\s[^>]*)?>").unwrap());
static RE_ITALIC_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<i(?:\s[^>]*)?>").unwrap());
static RE_ITALIC_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</i>").unwrap());
static RE_LIST_WRAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:/?ul|/li)(?:\s[^>]*)?>").unwrap());
static RE_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li(?:\s[^>]*)?>").unwrap());

/// Apply the fixed substitution sequence used for toast bodies.
///
/// Order matters: line breaks, bold, italics, then lists. Anything else is
/// left as is.
pub fn to_toast_text(message: &str) -> String {
    if !message.contains('<') {
        return message.to_string();
    }

    let steps: [(&Regex, &str); 6] = [
        (&RE_BR, "\n"),
        (&RE_BOLD, "*"),
        (&RE_ITALIC_OPEN, "["),
        (&RE_ITALIC_CLOSE, "]"),
        (&RE_LIST_WRAP, ""),
        (&RE_LIST_ITEM, "\n* "),
    ];

    steps
        .iter()
        .fold(message.to_string(), |text, &(re, replacement)| {
            re.replace_all(&text, NoExpand(replacement)).into_owned()
        })
}

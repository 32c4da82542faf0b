//! Runs the UI socket listener and shows each notification as a toast.

use tokio_util::sync::CancellationToken;
use ui_events::{ListenerConfig, NotificationListener, Toast, ToastConfig, ToastRenderer, Toaster};

const DEMO_TITLE: &str = "test";
const DEMO_MESSAGE: &str =
    "test<br><i class=\"test-class\">hello <b>world</b></i><ul><li>item 1</li><li>item 2</li></ul>";

/// Prints toasts to stdout, wrapped to the configured toast width.
pub struct ConsoleRenderer;

impl ToastRenderer for ConsoleRenderer {
    fn render(&self, config: &ToastConfig, toast: &Toast) {
        println!("{}", format_toast(config, toast));
    }
}

pub fn format_toast(config: &ToastConfig, toast: &Toast) -> String {
    let columns = config.text_columns();
    let mut out = format!("[{}] {}", toast.level().as_str(), toast.title);
    for line in toast.text.split('\n') {
        for wrapped in wrap_line(line, columns) {
            out.push_str("\n  ");
            out.push_str(&wrapped);
        }
    }
    out
}

fn wrap_line(line: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > columns && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Show the sample toast used to check renderer setup.
pub fn show_demo<R: ToastRenderer>(toaster: &Toaster<R>) -> Toast {
    toaster.display("notice", DEMO_TITLE, DEMO_MESSAGE)
}

/// Listen until `shutdown` is cancelled or the listener stops.
pub async fn run<R: ToastRenderer>(
    toaster: &Toaster<R>,
    listener: ListenerConfig,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    tracing::info!(url = %listener.url, "Starting UI notification listener");
    let (mut events, stop_tx) = NotificationListener::connect(listener)?;

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                let _ = stop_tx.send(()).await;
                tracing::info!("UI notification listener stopped");
                return Ok(());
            }
            event = events.recv() => {
                let Some(event) = event else {
                    tracing::warn!("UI listener ended");
                    return Ok(());
                };
                if let Some(toast) = toaster.handle_event(&event) {
                    tracing::debug!(kind = %toast.kind, title = %toast.title, "Toast shown");
                }
            }
        }
    }
}
